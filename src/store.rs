//! An in-memory store that holds the transactions while the app is running.

use time::OffsetDateTime;

use crate::{Error, Transaction, TransactionDraft, TransactionId};

/// Holds all recorded transactions in the order they were added.
///
/// The store hands out IDs, enforces the field constraints and rejects exact
/// duplicates. It does not persist anything itself, pair it with
/// [crate::LedgerFile] to keep the data across restarts.
#[derive(Debug, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    last_id: TransactionId,
    version: u64,
}

impl TransactionStore {
    /// Create an empty transaction store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from previously saved `records`.
    ///
    /// The records are checked against the same constraints [Self::add]
    /// enforces, plus ID uniqueness. If any record fails a check the whole
    /// batch is discarded and an empty store is returned. The ledger file on
    /// disk is not modified.
    pub fn hydrate(records: Vec<Transaction>) -> Self {
        for (index, record) in records.iter().enumerate() {
            if !record.is_valid() {
                tracing::warn!(
                    "ignoring saved transactions: record {} (id {}) has invalid fields",
                    index,
                    record.id
                );
                return Self::new();
            }

            let earlier = &records[..index];

            if earlier.iter().any(|other| other.id == record.id) {
                tracing::warn!(
                    "ignoring saved transactions: id {} appears more than once",
                    record.id
                );
                return Self::new();
            }

            if earlier.iter().any(|other| other.is_duplicate_of(record)) {
                tracing::warn!(
                    "ignoring saved transactions: record {} (id {}) duplicates an earlier record",
                    index,
                    record.id
                );
                return Self::new();
            }
        }

        let last_id = records.iter().map(|record| record.id).max().unwrap_or(0);

        Self {
            transactions: records,
            last_id,
            version: 0,
        }
    }

    /// Validate `draft`, assign it an ID and append it to the store.
    ///
    /// Returns the stored transaction.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::EmptyDescription], [Error::EmptyCategory] or
    ///   [Error::InvalidAmount] if the draft fails validation,
    /// - or [Error::DuplicateTransaction] if a transaction with the same
    ///   description, amount, category and kind already exists. Validation
    ///   errors take precedence, a blank draft is reported as invalid even
    ///   when a duplicate also exists.
    pub fn add(&mut self, draft: TransactionDraft) -> Result<Transaction, Error> {
        let transaction = draft.finalize(self.next_id())?;

        if self
            .transactions
            .iter()
            .any(|existing| existing.is_duplicate_of(&transaction))
        {
            return Err(Error::DuplicateTransaction);
        }

        self.last_id = transaction.id;
        self.version += 1;
        self.transactions.push(transaction.clone());

        Ok(transaction)
    }

    /// Remove the transaction with `id` and return it.
    ///
    /// Removing an ID that is not in the store is not an error, the store is
    /// left as-is and `None` is returned. A delete request can arrive twice
    /// when a page is stale, the repeat is treated as a no-op.
    pub fn remove(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)?;

        self.version += 1;

        Some(self.transactions.remove(index))
    }

    /// All transactions in the order they were added.
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Whether the store holds no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The number of transactions in the store.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// A counter that increases every time the stored data changes.
    ///
    /// Failed adds and no-op removals leave it unchanged, so callers can
    /// compare versions to tell whether anything needs re-rendering or
    /// saving.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// The ID for the next transaction.
    ///
    /// IDs are the current Unix time in milliseconds, bumped past the last
    /// assigned ID when several transactions arrive within the same
    /// millisecond or the clock steps backwards. This keeps them unique and
    /// strictly increasing.
    fn next_id(&self) -> TransactionId {
        now_unix_millis().max(self.last_id + 1)
    }
}

fn now_unix_millis() -> TransactionId {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as TransactionId
}

#[cfg(test)]
mod transaction_store_tests {
    use crate::{Error, Transaction, TransactionDraft, TransactionKind};

    use super::TransactionStore;

    fn coffee() -> TransactionDraft {
        Transaction::build("Coffee", 4.5, "Food", TransactionKind::Expense)
    }

    fn salary() -> TransactionDraft {
        Transaction::build("Salary", 1000.0, "Work", TransactionKind::Income)
    }

    #[test]
    fn add_returns_stored_transaction() {
        let mut store = TransactionStore::new();

        let transaction = store.add(coffee()).expect("draft should be valid");

        assert_eq!(store.list(), &[transaction]);
    }

    #[test]
    fn add_assigns_unique_increasing_ids() {
        let mut store = TransactionStore::new();
        let mut previous_id = 0;

        for n in 0..100 {
            let draft = Transaction::build(
                &format!("Purchase {n}"),
                1.0 + n as f64,
                "Misc",
                TransactionKind::Expense,
            );
            let transaction = store.add(draft).expect("draft should be valid");

            assert!(
                transaction.id > previous_id,
                "id {} should be greater than the previous id {}",
                transaction.id,
                previous_id
            );
            previous_id = transaction.id;
        }
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut store = TransactionStore::new();

        store.add(salary()).unwrap();
        store.add(coffee()).unwrap();

        let descriptions: Vec<_> = store
            .list()
            .iter()
            .map(|transaction| transaction.description.as_str())
            .collect();

        assert_eq!(descriptions, ["Salary", "Coffee"]);
    }

    #[test]
    fn add_rejects_duplicate() {
        let mut store = TransactionStore::new();
        store.add(coffee()).unwrap();

        let result = store.add(coffee());

        assert_eq!(result, Err(Error::DuplicateTransaction));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_accepts_near_duplicates() {
        let mut store = TransactionStore::new();
        store.add(coffee()).unwrap();

        let near_duplicates = [
            Transaction::build("Coffee beans", 4.5, "Food", TransactionKind::Expense),
            Transaction::build("Coffee", 4.55, "Food", TransactionKind::Expense),
            Transaction::build("Coffee", 4.5, "Treats", TransactionKind::Expense),
            Transaction::build("Coffee", 4.5, "Food", TransactionKind::Income),
        ];

        for draft in near_duplicates {
            store
                .add(draft)
                .expect("changing any field should lift the duplicate check");
        }

        assert_eq!(store.len(), 5);
    }

    #[test]
    fn add_reports_validation_before_duplicate() {
        let mut store = TransactionStore::new();
        store.add(coffee()).unwrap();

        let blank = Transaction::build("", 4.5, "Food", TransactionKind::Expense);

        assert_eq!(store.add(blank), Err(Error::EmptyDescription));
    }

    #[test]
    fn failed_add_leaves_store_unchanged() {
        let mut store = TransactionStore::new();
        store.add(coffee()).unwrap();
        let version_before = store.version();

        let invalid = Transaction::build("Tea", -1.0, "Food", TransactionKind::Expense);
        store.add(invalid).unwrap_err();
        store.add(coffee()).unwrap_err();

        assert_eq!(store.len(), 1);
        assert_eq!(store.version(), version_before);
    }

    #[test]
    fn remove_returns_transaction_and_preserves_order() {
        let mut store = TransactionStore::new();
        let first = store.add(salary()).unwrap();
        let second = store.add(coffee()).unwrap();
        let third = store
            .add(Transaction::build(
                "Rent",
                1800.0,
                "Housing",
                TransactionKind::Expense,
            ))
            .unwrap();

        let removed = store.remove(second.id);

        assert_eq!(removed, Some(second));
        assert_eq!(store.list(), &[first, third]);
    }

    #[test]
    fn remove_of_unknown_id_is_a_no_op() {
        let mut store = TransactionStore::new();
        store.add(salary()).unwrap();
        store.add(coffee()).unwrap();
        let version_before = store.version();

        let removed = store.remove(999_999);

        assert_eq!(removed, None);
        assert_eq!(store.len(), 2);
        assert_eq!(store.version(), version_before);
    }

    #[test]
    fn version_increases_on_each_mutation() {
        let mut store = TransactionStore::new();
        assert_eq!(store.version(), 0);

        let transaction = store.add(coffee()).unwrap();
        assert_eq!(store.version(), 1);

        store.add(salary()).unwrap();
        assert_eq!(store.version(), 2);

        store.remove(transaction.id).unwrap();
        assert_eq!(store.version(), 3);
    }

    #[test]
    fn is_empty_reflects_contents() {
        let mut store = TransactionStore::new();
        assert!(store.is_empty());

        let transaction = store.add(coffee()).unwrap();
        assert!(!store.is_empty());

        store.remove(transaction.id).unwrap();
        assert!(store.is_empty());
    }
}
