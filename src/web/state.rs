//! Shared handler state.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::store::ContactStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContactStore>,
    /// Held across every duplicate-check-then-write so two requests cannot
    /// interleave their read-modify-write cycles on the store.
    write_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }
}
