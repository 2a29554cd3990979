//! The file-read bridge itself.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::blob::Blob;
use crate::error::ReadError;
use crate::mode::ReadMode;
use crate::reader::{BuiltinReader, NativeReader};

/// Content produced by a successful read; the shape follows the mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutput {
    Text(String),
    ArrayBuffer(Vec<u8>),
    DataUrl(String),
    Base64(String),
}

/// Bridge between a blob-like source and the native read facility.
///
/// Holds exactly one reader and no other state; `read` resolves exactly once
/// per call with either content or a classified error, and concurrent calls
/// are independent.
#[derive(Debug, Clone)]
pub struct FileReadBridge<R = BuiltinReader> {
    reader: R,
}

impl Default for FileReadBridge<BuiltinReader> {
    fn default() -> Self {
        Self::new(BuiltinReader::new())
    }
}

impl<R: NativeReader> FileReadBridge<R> {
    /// Create a bridge over the given reader.
    ///
    /// The reader is constructed once and owned here; nothing in this crate
    /// reaches for an ambient global.
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read `source` in the given mode.
    ///
    /// Validation runs before any native call: an absent source resolves with
    /// [`ReadError::NoValidSource`], a mode the reader lacks with
    /// [`ReadError::UnsupportedMode`]. Otherwise exactly one native read is
    /// initiated; its failure surfaces as [`ReadError::ReadFailure`] with no
    /// retry. The blob is moved into the native call, so the caller's handle
    /// is released as soon as the read starts.
    pub async fn read(&self, mode: ReadMode, source: Option<Blob>) -> Result<ReadOutput, ReadError> {
        let Some(blob) = source else {
            tracing::debug!(%mode, "read rejected: no valid source");
            return Err(ReadError::NoValidSource);
        };

        if !self.reader.supports(mode.native_op()) {
            tracing::debug!(%mode, "read rejected: mode not supported by reader");
            return Err(ReadError::UnsupportedMode(mode));
        }

        tracing::trace!(%mode, size = blob.size(), "starting native read");
        let result = match mode {
            ReadMode::Text => self.reader.read_as_text(blob).await.map(ReadOutput::Text),
            ReadMode::ArrayBuffer => self
                .reader
                .read_as_array_buffer(blob)
                .await
                .map(ReadOutput::ArrayBuffer),
            ReadMode::DataUrl => self
                .reader
                .read_as_data_url(blob)
                .await
                .map(ReadOutput::DataUrl),
            ReadMode::Base64 => self
                .reader
                .read_as_array_buffer(blob)
                .await
                .map(|raw| ReadOutput::Base64(STANDARD.encode(raw))),
        };

        result.map_err(|err| {
            tracing::debug!(%mode, error = %err, "native read failed");
            ReadError::ReadFailure(err.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn text_mode_decodes_known_bytes() {
        let bridge = FileReadBridge::default();
        let out = bridge
            .read(ReadMode::Text, Some(Blob::new(&b"hello"[..])))
            .await
            .unwrap();
        assert_eq!(out, ReadOutput::Text("hello".to_string()));
    }

    #[tokio::test]
    async fn base64_mode_encodes_raw_bytes() {
        let bridge = FileReadBridge::default();
        let out = bridge
            .read(ReadMode::Base64, Some(Blob::new(vec![0x68, 0x69])))
            .await
            .unwrap();
        assert_eq!(out, ReadOutput::Base64("aGk=".to_string()));
    }

    #[tokio::test]
    async fn absent_source_resolves_no_valid_source() {
        let bridge = FileReadBridge::default();
        let err = bridge.read(ReadMode::Text, None).await.unwrap_err();
        assert_eq!(err, ReadError::NoValidSource);
    }
}
