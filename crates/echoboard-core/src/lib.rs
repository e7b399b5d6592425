//! Domain layer of the EchoBoard client store.
//!
//! Holds the session/project models, the closed action vocabulary, the pure
//! reducer and the durable storage contract. Nothing in this crate performs
//! I/O; storage backends live in `echoboard-infrastructure` and the store
//! shell that applies effects lives in `echoboard-application`.

pub mod config;
pub mod error;
pub mod notification;
pub mod palette;
pub mod project;
pub mod storage;
pub mod store;
pub mod user;

// Re-export common error type
pub use error::{EchoBoardError, Result};
