//! Defines the core data model for transactions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Error;

/// The unique identifier of a [Transaction].
///
/// IDs are assigned by the transaction store and increase with creation
/// order, so sorting by ID recovers the order entries were recorded in.
pub type TransactionId = i64;

/// Whether a transaction brought money in or sent money out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money earned, e.g. a salary payment.
    Income,
    /// Money spent, e.g. groceries.
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
        }
    }
}

/// An income or expense, i.e. an event where money was either earned or spent.
///
/// A transaction is immutable once created. To create one, use
/// [Transaction::build] and pass the draft to the transaction store, which
/// assigns the ID.
///
/// The serialized form matches the ledger file layout: the kind is stored
/// under the field name `type` with the values `income` and `expense`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money earned or spent, always greater than zero.
    /// The kind says which direction the money moved in.
    pub amount: f64,
    /// The free-form group the transaction belongs to, e.g. "Groceries".
    pub category: String,
    /// Whether the transaction is an income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl Transaction {
    /// Create a new transaction draft.
    ///
    /// Shortcut for [TransactionDraft] for discoverability.
    pub fn build(
        description: &str,
        amount: f64,
        category: &str,
        kind: TransactionKind,
    ) -> TransactionDraft {
        TransactionDraft {
            description: description.to_owned(),
            amount,
            category: category.to_owned(),
            kind,
        }
    }

    /// Whether `other` records the same description, amount, category and
    /// kind as this transaction. The IDs are ignored.
    pub fn is_duplicate_of(&self, other: &Transaction) -> bool {
        self.description == other.description
            && self.amount == other.amount
            && self.category == other.category
            && self.kind == other.kind
    }

    /// Whether this transaction meets the field constraints: non-blank
    /// description and category, and a finite amount greater than zero.
    pub(crate) fn is_valid(&self) -> bool {
        !self.description.trim().is_empty()
            && !self.category.trim().is_empty()
            && self.amount.is_finite()
            && self.amount > 0.0
    }
}

/// A proposed [Transaction] that has not been checked or given an ID yet.
///
/// Drafts come from user input, so the text fields may be blank and the
/// amount may be nonsense. [TransactionDraft::finalize] performs the checks
/// and produces the transaction, or reports why it cannot.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    description: String,
    amount: f64,
    category: String,
    kind: TransactionKind,
}

impl TransactionDraft {
    /// Validate the draft and turn it into a [Transaction] with the given `id`.
    ///
    /// Leading and trailing whitespace is trimmed from the description and
    /// category before the emptiness check, and the trimmed text is what gets
    /// stored.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::EmptyDescription] if the description is empty or blank,
    /// - or [Error::EmptyCategory] if the category is empty or blank,
    /// - or [Error::InvalidAmount] if the amount is not a finite number
    ///   greater than zero.
    pub fn finalize(self, id: TransactionId) -> Result<Transaction, Error> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(Error::EmptyDescription);
        }

        let category = self.category.trim();
        if category.is_empty() {
            return Err(Error::EmptyCategory);
        }

        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(Error::InvalidAmount(self.amount));
        }

        Ok(Transaction {
            id,
            description: description.to_owned(),
            amount: self.amount,
            category: category.to_owned(),
            kind: self.kind,
        })
    }
}


#[cfg(test)]
mod transaction_tests {
    use super::{Transaction, TransactionKind};

    fn coffee(id: i64) -> Transaction {
        Transaction::build("Coffee", 4.5, "Food", TransactionKind::Expense)
            .finalize(id)
            .unwrap()
    }

    #[test]
    fn is_duplicate_of_ignores_id() {
        assert!(coffee(1).is_duplicate_of(&coffee(2)));
    }

    #[test]
    fn is_duplicate_of_compares_every_field() {
        let original = coffee(1);

        let mut other_description = coffee(2);
        other_description.description = "Tea".to_owned();

        let mut other_amount = coffee(2);
        other_amount.amount = 5.0;

        let mut other_category = coffee(2);
        other_category.category = "Drinks".to_owned();

        let mut other_kind = coffee(2);
        other_kind.kind = TransactionKind::Income;

        for other in [other_description, other_amount, other_category, other_kind] {
            assert!(!original.is_duplicate_of(&other));
        }
    }

    #[test]
    fn kind_displays_in_lowercase() {
        assert_eq!(TransactionKind::Income.to_string(), "income");
        assert_eq!(TransactionKind::Expense.to_string(), "expense");
    }
}
