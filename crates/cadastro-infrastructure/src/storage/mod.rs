//! Storage substrate for the record store.

mod atomic_json;

pub use atomic_json::{AtomicJsonError, AtomicJsonFile, FileLock};
