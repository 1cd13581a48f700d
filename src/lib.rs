//! Centsible is a web app for tracking your personal income and spending.
//!
//! It keeps an ordered, in-memory list of transactions, mirrors the whole
//! list to a JSON ledger file after every change, and serves a single page
//! with running totals, a transaction table and a category breakdown chart.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod dashboard;
mod endpoints;
mod html;
mod ledger;
mod not_found;
mod routing;
mod store;
mod summary;
mod transaction;

pub use app_state::AppState;
pub use ledger::LedgerFile;
pub use routing::build_router;
pub use store::TransactionStore;
pub use transaction::{Transaction, TransactionDraft, TransactionId, TransactionKind};

use crate::{alert::Alert, html::error_view};

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
///
/// `EmptyDescription`, `EmptyCategory` and `InvalidAmount` reject a proposed
/// transaction before it exists, `DuplicateTransaction` rejects one that
/// repeats an existing entry, and `SaveFailed` reports a ledger write that
/// did not reach disk. None of these are fatal: the in-memory store stays
/// the source of truth and the user can retry.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty or blank string was used as a transaction description.
    #[error("transaction description cannot be empty")]
    EmptyDescription,

    /// An empty or blank string was used as a transaction category.
    #[error("transaction category cannot be empty")]
    EmptyCategory,

    /// A transaction amount was zero, negative or not a finite number.
    #[error("{0} is not a valid amount, amounts must be greater than zero")]
    InvalidAmount(f64),

    /// A new transaction repeated the description, amount, category and kind
    /// of an existing one.
    ///
    /// Identical entries are almost always an accidental double submission,
    /// so they are rejected rather than recorded twice.
    #[error("an identical transaction already exists")]
    DuplicateTransaction,

    /// The ledger file could not be written.
    ///
    /// The in-memory store keeps the change; the next successful save will
    /// bring the file back in step.
    #[error("could not save the ledger file: {0}")]
    SaveFailed(String),

    /// Could not acquire the lock on the transaction store.
    #[error("could not acquire the store lock")]
    StoreLockError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::SaveFailed(_) => internal_error_response(
                "Save Failed",
                "The ledger file could not be written. Check the server logs for details.",
            ),
            Error::StoreLockError => internal_error_response(
                "Sorry, something went wrong.",
                "Try again later or check the server logs.",
            ),
            // Any errors that are not handled above are not intended to be
            // shown to the client as full pages.
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                internal_error_response(
                    "Sorry, something went wrong.",
                    "Try again later or check the server logs.",
                )
            }
        }
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        match self {
            Error::EmptyDescription => Alert::error(
                "Missing description",
                "Enter a short description of the transaction.",
            )
            .into_response(StatusCode::BAD_REQUEST),
            Error::EmptyCategory => Alert::error(
                "Missing category",
                "Enter a category for the transaction, for example \"Food\".",
            )
            .into_response(StatusCode::BAD_REQUEST),
            Error::InvalidAmount(amount) => Alert::error(
                "Invalid amount",
                &format!("{amount} is not a valid amount. Enter an amount greater than zero."),
            )
            .into_response(StatusCode::BAD_REQUEST),
            Error::DuplicateTransaction => Alert::error(
                "Duplicate transaction",
                "An identical transaction already exists. Change one of the fields, \
                or delete the existing transaction first.",
            )
            .into_response(StatusCode::BAD_REQUEST),
            Error::SaveFailed(_) => Alert::warning(
                "Could not save your data",
                "The change was recorded but could not be written to the ledger file. \
                Check the server logs for details.",
            )
            .into_response(StatusCode::INTERNAL_SERVER_ERROR),
            _ => Alert::error(
                "Something went wrong",
                "An unexpected error occurred, check the server logs for more details.",
            )
            .into_response(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

fn internal_error_response(description: &str, fix: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        error_view("Internal Server Error", "500", description, fix),
    )
        .into_response()
}
