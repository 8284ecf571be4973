//! Financial profile, its persisted store and storage backends

mod data;
mod store;
pub mod storage;

pub use data::{coerce_number, FinancialProfile, ProfileField};
pub use store::{ProfileStore, SubscriptionId, STORAGE_KEY};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
