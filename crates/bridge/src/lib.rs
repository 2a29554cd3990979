//! Async bridge between blob-like sources and browser-style read modes.
//!
//! The core type is [`FileReadBridge`]: it validates a source handle, picks
//! the native read operation for the requested [`ReadMode`], runs it exactly
//! once, and resolves with either the transformed content or a classified
//! [`ReadError`]. The native facility itself sits behind the [`NativeReader`]
//! trait; [`BuiltinReader`] is the default in-process implementation.
//!
//! The [`dispatch`] module routes the tagged wire messages defined in
//! `blobread-protocol` through the bridge, correlating responses over
//! single-fire oneshot channels.

pub mod blob;
pub mod bridge;
pub mod dispatch;
pub mod error;
pub mod mode;
pub mod reader;
pub mod registry;

pub use blob::Blob;
pub use bridge::{FileReadBridge, ReadOutput};
pub use dispatch::Dispatcher;
pub use error::ReadError;
pub use mode::{NativeOp, ReadMode};
pub use reader::{BuiltinReader, NativeReader};
pub use registry::PendingReads;
