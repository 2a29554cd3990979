//! Error taxonomy for bridge reads.

use thiserror::Error;

use crate::mode::ReadMode;

/// Why a read resolved with a failure.
///
/// All variants are terminal: the bridge never retries, and the caller
/// decides whether to ask for a new source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    /// The source was absent or not blob-like; no native read was started.
    #[error("no valid source: expected a blob-like value")]
    NoValidSource,

    /// The reader does not implement the native operation this mode needs.
    #[error("read mode {0} is not supported by this reader")]
    UnsupportedMode(ReadMode),

    /// The native read was started and failed.
    #[error("native read failed: {0}")]
    ReadFailure(String),
}
