//! Defines the endpoint for creating a new transaction.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::Deserialize;

use crate::{
    AppState, Error, LedgerFile, TransactionKind, TransactionStore,
    alert::Flash,
    endpoints,
    transaction::Transaction,
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The in-memory transaction store.
    pub store: Arc<Mutex<TransactionStore>>,
    /// The file the transactions are saved to.
    pub ledger: Arc<LedgerFile>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            ledger: state.ledger.clone(),
        }
    }
}

/// The form data for creating a transaction.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// Text detailing the transaction.
    pub description: String,
    /// The value of the transaction in dollars.
    pub amount: f64,
    /// The group the transaction belongs to.
    pub category: String,
    /// Whether the transaction is an income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

/// A route handler for creating a new transaction.
///
/// On success the transaction is added to the store, the ledger file is
/// rewritten and the client is redirected to the dashboard. A validation or
/// duplicate error is returned as an alert fragment with a 4xx status and
/// leaves the store untouched. A failed save keeps the transaction in memory
/// and still redirects, the dashboard then shows a warning.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionForm>,
) -> impl IntoResponse {
    let mut store = match state.store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire store lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };

    let draft = Transaction::build(&form.description, form.amount, &form.category, form.kind);

    let transaction = match store.add(draft) {
        Ok(transaction) => transaction,
        Err(error) => return error.into_alert_response(),
    };

    let flash = match state.ledger.save(store.list()) {
        Ok(()) => {
            tracing::debug!("created transaction {}", transaction.id);
            Flash::Added
        }
        Err(error) => {
            tracing::error!("created transaction {} but {error}", transaction.id);
            Flash::SaveFailed
        }
    };

    (
        HxRedirect(format!("{}?{}", endpoints::ROOT, flash.to_query())),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        body::Body,
        extract::State,
        http::{Response, StatusCode},
        response::IntoResponse,
    };
    use axum_extra::extract::Form;
    use axum_htmx::HX_REDIRECT;
    use tempfile::TempDir;

    use crate::{
        LedgerFile, TransactionKind, TransactionStore,
        transaction::create_transaction_endpoint::{
            CreateTransactionState, TransactionForm, create_transaction_endpoint,
        },
    };

    fn test_state(directory: &TempDir) -> CreateTransactionState {
        CreateTransactionState {
            store: Arc::new(Mutex::new(TransactionStore::new())),
            ledger: Arc::new(LedgerFile::new(directory.path().join("budget.json"))),
        }
    }

    fn coffee_form() -> TransactionForm {
        TransactionForm {
            description: "Coffee".to_string(),
            amount: 4.5,
            category: "Food".to_string(),
            kind: TransactionKind::Expense,
        }
    }

    #[tokio::test]
    async fn can_create_transaction() {
        let directory = tempfile::tempdir().unwrap();
        let state = test_state(&directory);

        let response = create_transaction_endpoint(State(state.clone()), Form(coffee_form()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_redirects_to(response, "/?alert=added");

        let store = state.store.lock().unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].description, "Coffee");

        // The ledger file mirrors the store
        assert_eq!(state.ledger.load(), store.list());
    }

    #[tokio::test]
    async fn rejects_invalid_transaction() {
        let directory = tempfile::tempdir().unwrap();
        let state = test_state(&directory);

        let form = TransactionForm {
            description: "   ".to_string(),
            ..coffee_form()
        };

        let response = create_transaction_endpoint(State(state.clone()), Form(form))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.store.lock().unwrap().is_empty());
        // Nothing was saved either
        assert!(!state.ledger.path().exists());
    }

    #[tokio::test]
    async fn rejects_duplicate_transaction() {
        let directory = tempfile::tempdir().unwrap();
        let state = test_state(&directory);

        create_transaction_endpoint(State(state.clone()), Form(coffee_form()))
            .await
            .into_response();
        let response = create_transaction_endpoint(State(state.clone()), Form(coffee_form()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.store.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn redirects_with_warning_when_save_fails() {
        let directory = tempfile::tempdir().unwrap();
        let state = CreateTransactionState {
            store: Arc::new(Mutex::new(TransactionStore::new())),
            ledger: Arc::new(LedgerFile::new(
                directory.path().join("missing-dir").join("budget.json"),
            )),
        };

        let response = create_transaction_endpoint(State(state.clone()), Form(coffee_form()))
            .await
            .into_response();

        assert_redirects_to(response, "/?alert=save-failed");
        // The transaction stays in memory even though the save failed
        assert_eq!(state.store.lock().unwrap().len(), 1);
    }

    #[test]
    fn transaction_form_parses_html_form_data() {
        let form_data = "description=Coffee&amount=4.5&category=Food&type=expense";
        let form: TransactionForm = serde_html_form::from_str(form_data).unwrap();

        assert_eq!(form.description, "Coffee");
        assert_eq!(form.amount, 4.5);
        assert_eq!(form.category, "Food");
        assert_eq!(form.kind, TransactionKind::Expense);
    }

    #[track_caller]
    fn assert_redirects_to(response: Response<Body>, expected: &str) {
        let location = response
            .headers()
            .get(HX_REDIRECT)
            .expect("expected response to have the header hx-redirect");
        assert_eq!(
            location, expected,
            "got redirect to {location:?}, want redirect to {expected}"
        );
    }
}
