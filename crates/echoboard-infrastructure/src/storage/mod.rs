//! Durable storage backends.

mod atomic_json;
mod file_storage;
mod memory_storage;

pub use atomic_json::{AtomicJsonError, AtomicJsonFile};
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;
