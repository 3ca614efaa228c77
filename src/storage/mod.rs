//! Key-value storage for the persisted budget state
//!
//! The tracker keeps its whole state as one string value under one key, so
//! any backend that can read, write and remove strings by key will do.

pub mod file;
pub mod file_io;
pub mod memory;

pub use file::FileStorage;
pub use file_io::{read_optional, write_atomic};
pub use memory::MemoryStorage;

use crate::error::BudgetError;

/// Key under which the budget state is stored
pub const STATE_KEY: &str = "budgetTrackerData";

/// A local string key-value store
pub trait StateStorage {
    /// Read the value stored under `key`, if any
    fn read(&self, key: &str) -> Result<Option<String>, BudgetError>;

    /// Store `value` under `key`, replacing any previous value
    fn write(&mut self, key: &str, value: &str) -> Result<(), BudgetError>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<(), BudgetError>;
}

impl<T: StateStorage + ?Sized> StateStorage for Box<T> {
    fn read(&self, key: &str) -> Result<Option<String>, BudgetError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), BudgetError> {
        (**self).write(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), BudgetError> {
        (**self).remove(key)
    }
}
