//! Defines the endpoint for deleting a transaction.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_htmx::HxRedirect;

use crate::{
    AppState, Error, LedgerFile, TransactionId, TransactionStore, alert::Flash, endpoints,
};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The in-memory transaction store.
    pub store: Arc<Mutex<TransactionStore>>,
    /// The file the transactions are saved to.
    pub ledger: Arc<LedgerFile>,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            ledger: state.ledger.clone(),
        }
    }
}

/// A route handler for deleting a transaction.
///
/// Deleting an ID that is not in the store gets the same response as a
/// successful delete. The row is gone either way, and stale pages can send
/// the same delete twice. The ledger file is rewritten from the store in
/// both cases, then the client is redirected to the dashboard.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> impl IntoResponse {
    let mut store = match state.store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire store lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };

    match store.remove(transaction_id) {
        Some(transaction) => tracing::debug!("deleted transaction {}", transaction.id),
        None => tracing::debug!("transaction {transaction_id} was already gone"),
    }

    let location = match state.ledger.save(store.list()) {
        Ok(()) => endpoints::ROOT.to_owned(),
        Err(error) => {
            tracing::error!("could not save after deleting {transaction_id}: {error}");
            format!("{}?{}", endpoints::ROOT, Flash::SaveFailed.to_query())
        }
    };

    (HxRedirect(location), StatusCode::SEE_OTHER).into_response()
}
