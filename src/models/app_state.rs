use crate::storage::{MemStorage, Storage};

/// Shared application state. The store is behind the [`Storage`] trait so a
/// durable backend can replace the in-memory maps without touching handlers.
pub struct AppState {
    pub store: Box<dyn Storage>,
}

impl AppState {
    pub fn new(store: Box<dyn Storage>) -> Self {
        Self { store }
    }

    /// Empty in-memory state, used by tests.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemStorage::new()))
    }

    /// In-memory state pre-seeded with the demo account.
    pub fn with_sample_data() -> Self {
        Self::new(Box::new(MemStorage::with_sample_data()))
    }
}
