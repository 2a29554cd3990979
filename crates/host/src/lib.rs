//! Example upload servers for manual testing.
//!
//! Two variants of the same five-line demo: a storing server that writes the
//! uploaded field to disk and answers with the stored name, and an
//! acknowledging server that discards the field and answers `"received"`.
//! Neither validates, retries, or promises persistence.

pub mod upload;

pub use upload::{ack_router, storing_router};
