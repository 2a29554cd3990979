//! Tagged read request/response envelopes.
//!
//! Requests follow the `{tag, payload}` shape of the front-end dispatcher:
//!
//! ```json
//! {"tag": "readAsText", "payload": {"id": 1, "source": {"bytes": "aGVsbG8="}}}
//! ```
//!
//! The `source` is deliberately opaque here (`serde_json::Value`): whether it
//! is blob-like is decided by the dispatcher on the other side of the
//! boundary, not by deserialization. Unknown tags fail to parse, which is the
//! protocol-level error the original glue answered before dispatch.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Per-request payload: a correlation id plus the opaque source value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadPayload {
    pub id: u64,
    #[serde(default)]
    pub source: Value,
}

/// A tagged read request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tag", content = "payload")]
pub enum ReadRequest {
    #[serde(rename = "readAsText")]
    ReadAsText(ReadPayload),
    #[serde(rename = "readAsArrayBuffer")]
    ReadAsArrayBuffer(ReadPayload),
    #[serde(rename = "readAsDataUrl")]
    ReadAsDataUrl(ReadPayload),
    #[serde(rename = "readAsBase64")]
    ReadAsBase64(ReadPayload),
}

impl ReadRequest {
    /// Correlation id carried by the request.
    pub const fn id(&self) -> u64 {
        self.payload().id
    }

    pub const fn payload(&self) -> &ReadPayload {
        match self {
            Self::ReadAsText(p)
            | Self::ReadAsArrayBuffer(p)
            | Self::ReadAsDataUrl(p)
            | Self::ReadAsBase64(p) => p,
        }
    }

    pub fn into_payload(self) -> ReadPayload {
        match self {
            Self::ReadAsText(p)
            | Self::ReadAsArrayBuffer(p)
            | Self::ReadAsDataUrl(p)
            | Self::ReadAsBase64(p) => p,
        }
    }
}

/// Content carried by a successful read, tagged by shape.
///
/// Array-buffer bytes travel base64-encoded; the other shapes are already
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum WireContent {
    #[serde(rename = "text")]
    Text(String),
    #[serde(rename = "arrayBuffer", with = "wire_bytes")]
    ArrayBuffer(Vec<u8>),
    #[serde(rename = "dataUrl")]
    DataUrl(String),
    #[serde(rename = "base64")]
    Base64(String),
}

/// Error classification carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    NoValidSource,
    UnsupportedMode,
    ReadFailure,
}

/// Outcome of one read: content or a classified error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "body")]
pub enum ReadOutcome {
    #[serde(rename = "data")]
    Data(WireContent),
    #[serde(rename = "error")]
    Error(ErrorCode),
}

/// A tagged read response, correlated to its request by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadResponse {
    pub id: u64,
    pub outcome: ReadOutcome,
}

mod wire_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}
