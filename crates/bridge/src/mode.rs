//! Read modes and the native operations they map onto.

/// How the caller wants the source decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadMode {
    /// UTF-8 text.
    Text,
    /// Raw bytes.
    ArrayBuffer,
    /// `data:` URL string.
    DataUrl,
    /// Base64-encoded bytes.
    Base64,
}

/// Operations a native reader may expose.
///
/// There are only three: `Base64` is not a native operation, it is the
/// array-buffer operation followed by an encoding step in the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeOp {
    Text,
    ArrayBuffer,
    DataUrl,
}

impl ReadMode {
    /// The native operation this mode requires.
    pub const fn native_op(self) -> NativeOp {
        match self {
            Self::Text => NativeOp::Text,
            Self::ArrayBuffer | Self::Base64 => NativeOp::ArrayBuffer,
            Self::DataUrl => NativeOp::DataUrl,
        }
    }
}

impl std::fmt::Display for ReadMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Text => "readAsText",
            Self::ArrayBuffer => "readAsArrayBuffer",
            Self::DataUrl => "readAsDataUrl",
            Self::Base64 => "readAsBase64",
        };
        write!(f, "{s}")
    }
}
