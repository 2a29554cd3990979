//! The blob-like source handle.

use std::path::Path;

use anyhow::{Context, Result};
use bytes::Bytes;

/// A finite binary payload with a known length and an optional media type.
///
/// This is the "blob-like" handle the bridge reads from. The payload is
/// reference-counted, so cloning a `Blob` shares bytes instead of copying
/// them; dropping the last handle releases the buffer.
#[derive(Debug, Clone)]
pub struct Blob {
    data: Bytes,
    media_type: Option<String>,
}

impl Blob {
    /// Create a blob over raw bytes with no media type.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            media_type: None,
        }
    }

    /// Create a blob with an explicit media type (e.g. `text/plain`).
    pub fn with_media_type(data: impl Into<Bytes>, media_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            media_type: Some(media_type.into()),
        }
    }

    /// Load a file into a blob, guessing the media type from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read(path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;
        let media_type = mime_guess::from_path(path)
            .first()
            .map(|m| m.essence_str().to_string());
        Ok(Self {
            data: data.into(),
            media_type,
        })
    }

    /// Payload length in bytes.
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    /// Declared media type, if any.
    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    /// Borrow the payload.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Take the payload out of the handle.
    pub fn into_bytes(self) -> Bytes {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn size_and_media_type() {
        let blob = Blob::with_media_type(&b"hello"[..], "text/plain");
        assert_eq!(blob.size(), 5);
        assert_eq!(blob.media_type(), Some("text/plain"));
        assert_eq!(Blob::new(&b""[..]).size(), 0);
        assert_eq!(Blob::new(&b""[..]).media_type(), None);
    }

    #[test]
    fn clones_share_the_payload() {
        let blob = Blob::new(vec![1u8, 2, 3]);
        let copy = blob.clone();
        assert_eq!(copy.as_bytes(), blob.as_bytes());
    }

    #[tokio::test]
    async fn from_path_reads_bytes_and_guesses_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        {
            let mut f = std::fs::File::create(&path).unwrap();
            f.write_all(b"on disk").unwrap();
        }

        let blob = Blob::from_path(&path).await.unwrap();
        assert_eq!(blob.as_bytes(), b"on disk");
        assert_eq!(blob.media_type(), Some("text/plain"));
    }

    #[tokio::test]
    async fn from_path_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Blob::from_path(dir.path().join("absent")).await;
        assert!(err.is_err());
    }
}
