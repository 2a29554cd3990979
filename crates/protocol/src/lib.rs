//! Shared wire types for blobread.
//!
//! Defines the tagged request/response envelopes crossing the call boundary
//! between a front end and the file-read bridge.

pub mod messages;

pub use messages::*;
