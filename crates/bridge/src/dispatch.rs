//! Tagged-message dispatch over the bridge.
//!
//! This is the call-boundary glue: requests arrive as the tagged envelopes
//! defined in `blobread-protocol`, carrying an opaque source value. The
//! dispatcher coerces the source into a [`Blob`], routes the tag to a
//! [`ReadMode`], runs the bridge, and answers with a tagged response.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use blobread_protocol::{ErrorCode, ReadOutcome, ReadPayload, ReadRequest, ReadResponse, WireContent};
use serde_json::Value;
use tokio::sync::oneshot;

use crate::blob::Blob;
use crate::bridge::{FileReadBridge, ReadOutput};
use crate::error::ReadError;
use crate::mode::ReadMode;
use crate::reader::NativeReader;
use crate::registry::PendingReads;

/// Coerce an opaque wire value into a blob handle.
///
/// Only an object carrying base64 `bytes` (and optionally a `mediaType`
/// string) is blob-like; `null`, a bare string, a number, or a malformed
/// object all coerce to `None`. This is the typed-boundary analogue of the
/// `instanceof Blob` check the original glue performed.
pub fn coerce_source(value: &Value) -> Option<Blob> {
    let obj = value.as_object()?;
    let encoded = obj.get("bytes")?.as_str()?;
    let data = STANDARD.decode(encoded).ok()?;
    let media_type = obj.get("mediaType").and_then(Value::as_str);
    Some(match media_type {
        Some(mt) => Blob::with_media_type(data, mt),
        None => Blob::new(data),
    })
}

const fn mode_of(request: &ReadRequest) -> ReadMode {
    match request {
        ReadRequest::ReadAsText(_) => ReadMode::Text,
        ReadRequest::ReadAsArrayBuffer(_) => ReadMode::ArrayBuffer,
        ReadRequest::ReadAsDataUrl(_) => ReadMode::DataUrl,
        ReadRequest::ReadAsBase64(_) => ReadMode::Base64,
    }
}

fn wire_content(output: ReadOutput) -> WireContent {
    match output {
        ReadOutput::Text(s) => WireContent::Text(s),
        ReadOutput::ArrayBuffer(b) => WireContent::ArrayBuffer(b),
        ReadOutput::DataUrl(s) => WireContent::DataUrl(s),
        ReadOutput::Base64(s) => WireContent::Base64(s),
    }
}

const fn error_code(err: &ReadError) -> ErrorCode {
    match err {
        ReadError::NoValidSource => ErrorCode::NoValidSource,
        ReadError::UnsupportedMode(_) => ErrorCode::UnsupportedMode,
        ReadError::ReadFailure(_) => ErrorCode::ReadFailure,
    }
}

/// Route one tagged request through the bridge and wrap the outcome.
pub async fn handle<R: NativeReader>(
    bridge: &FileReadBridge<R>,
    request: ReadRequest,
) -> ReadResponse {
    let mode = mode_of(&request);
    let ReadPayload { id, source } = request.into_payload();
    let blob = coerce_source(&source);
    drop(source);

    let outcome = match bridge.read(mode, blob).await {
        Ok(output) => ReadOutcome::Data(wire_content(output)),
        Err(err) => ReadOutcome::Error(error_code(&err)),
    };
    ReadResponse { id, outcome }
}

/// Dispatcher owning a bridge and the in-flight read registry.
///
/// `submit` hands back a oneshot receiver that fires exactly once with the
/// tagged response for that request id; concurrent submissions are
/// independent.
pub struct Dispatcher<R> {
    bridge: Arc<FileReadBridge<R>>,
    pending: Arc<PendingReads>,
}

impl<R> Clone for Dispatcher<R> {
    fn clone(&self) -> Self {
        Self {
            bridge: Arc::clone(&self.bridge),
            pending: Arc::clone(&self.pending),
        }
    }
}

impl<R: NativeReader + 'static> Dispatcher<R> {
    pub fn new(bridge: FileReadBridge<R>) -> Self {
        Self {
            bridge: Arc::new(bridge),
            pending: Arc::new(PendingReads::new()),
        }
    }

    /// Registry of in-flight reads, shared with whoever relays responses.
    pub fn pending(&self) -> Arc<PendingReads> {
        Arc::clone(&self.pending)
    }

    /// Submit a tagged request; the read runs on its own task.
    pub async fn submit(&self, request: ReadRequest) -> oneshot::Receiver<ReadResponse> {
        let id = request.id();
        let rx = self.pending.register(id).await;

        let bridge = Arc::clone(&self.bridge);
        let pending = Arc::clone(&self.pending);
        tokio::spawn(async move {
            let response = handle(bridge.as_ref(), request).await;
            pending.resolve(id, response).await;
        });

        rx
    }
}
