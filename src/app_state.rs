//! Implements a struct that holds the state of the HTTP server.

use std::sync::{Arc, Mutex};

use crate::{LedgerFile, TransactionStore};

/// The state of the HTTP server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The in-memory transaction store.
    pub store: Arc<Mutex<TransactionStore>>,

    /// The file the transactions are saved to.
    pub ledger: Arc<LedgerFile>,
}

impl AppState {
    /// Create a new [AppState] backed by `ledger`.
    ///
    /// The store starts out with whatever the ledger file holds. A missing or
    /// damaged file produces an empty store.
    pub fn new(ledger: LedgerFile) -> Self {
        let store = TransactionStore::hydrate(ledger.load());

        tracing::debug!(
            "loaded {} transaction(s) from {}",
            store.len(),
            ledger.path().display()
        );

        Self {
            store: Arc::new(Mutex::new(store)),
            ledger: Arc::new(ledger),
        }
    }
}
