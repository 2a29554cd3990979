//! The native read facility behind the bridge.

use anyhow::Result;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::blob::Blob;
use crate::mode::NativeOp;

/// Media type used in data-URLs when the blob declares none.
const DEFAULT_MEDIA_TYPE: &str = "application/octet-stream";

/// The platform's asynchronous binary-read facility.
///
/// Blobs are taken by value: initiating a read consumes the caller's handle,
/// so large payloads are not pinned past the call.
///
/// `supports` is the capability probe the bridge checks before invoking
/// anything; an implementation that answers `false` for an operation will
/// never see that operation called.
#[async_trait]
pub trait NativeReader: Send + Sync {
    /// Whether this reader implements the given native operation.
    fn supports(&self, _op: NativeOp) -> bool {
        true
    }

    /// Decode the payload as text.
    async fn read_as_text(&self, blob: Blob) -> Result<String>;

    /// Return the raw payload bytes.
    async fn read_as_array_buffer(&self, blob: Blob) -> Result<Vec<u8>>;

    /// Encode the payload as a `data:` URL.
    async fn read_as_data_url(&self, blob: Blob) -> Result<String>;
}

/// Default in-process reader: reads straight from the blob payload.
///
/// Text decoding uses replacement characters on invalid UTF-8, matching the
/// behavior of the browser facility this crate models.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinReader;

impl BuiltinReader {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NativeReader for BuiltinReader {
    async fn read_as_text(&self, blob: Blob) -> Result<String> {
        Ok(String::from_utf8_lossy(blob.as_bytes()).into_owned())
    }

    async fn read_as_array_buffer(&self, blob: Blob) -> Result<Vec<u8>> {
        Ok(blob.into_bytes().to_vec())
    }

    async fn read_as_data_url(&self, blob: Blob) -> Result<String> {
        let media_type = blob.media_type().unwrap_or(DEFAULT_MEDIA_TYPE).to_string();
        let payload = STANDARD.encode(blob.as_bytes());
        Ok(format!("data:{media_type};base64,{payload}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn text_decodes_utf8() {
        let reader = BuiltinReader::new();
        let out = reader.read_as_text(Blob::new(&b"hello"[..])).await.unwrap();
        assert_eq!(out, "hello");
    }

    #[tokio::test]
    async fn text_replaces_invalid_utf8() {
        let reader = BuiltinReader::new();
        let out = reader
            .read_as_text(Blob::new(vec![0x68, 0xff, 0x69]))
            .await
            .unwrap();
        assert_eq!(out, "h\u{fffd}i");
    }

    #[tokio::test]
    async fn array_buffer_is_identity() {
        let reader = BuiltinReader::new();
        let out = reader
            .read_as_array_buffer(Blob::new(vec![0, 1, 254, 255]))
            .await
            .unwrap();
        assert_eq!(out, vec![0, 1, 254, 255]);
    }

    #[tokio::test]
    async fn data_url_uses_declared_media_type() {
        let reader = BuiltinReader::new();
        let blob = Blob::with_media_type(&b"hello"[..], "text/plain");
        let out = reader.read_as_data_url(blob).await.unwrap();
        assert_eq!(out, "data:text/plain;base64,aGVsbG8=");
    }

    #[tokio::test]
    async fn data_url_defaults_to_octet_stream() {
        let reader = BuiltinReader::new();
        let out = reader.read_as_data_url(Blob::new(&b"hi"[..])).await.unwrap();
        assert_eq!(out, "data:application/octet-stream;base64,aGk=");
    }

    #[test]
    fn builtin_supports_every_op() {
        let reader = BuiltinReader::new();
        assert!(reader.supports(NativeOp::Text));
        assert!(reader.supports(NativeOp::ArrayBuffer));
        assert!(reader.supports(NativeOp::DataUrl));
    }
}
