//! Transaction management for the budgeting application.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionDraft` for creating transactions
//! - The endpoints for creating and deleting transactions

mod core;
mod create_transaction_endpoint;
mod delete_transaction_endpoint;

pub use core::{Transaction, TransactionDraft, TransactionId, TransactionKind};
pub use create_transaction_endpoint::create_transaction_endpoint;
pub use delete_transaction_endpoint::delete_transaction_endpoint;
