//! Derives the dashboard figures from the transaction list.
//!
//! Nothing in here is cached. The figures are recomputed from the full list
//! on every page render.

use crate::{Transaction, TransactionKind};

/// The headline figures shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// The sum of all income amounts.
    pub total_income: f64,
    /// The sum of all expense amounts.
    pub total_expense: f64,
    /// Income minus expenses. Negative when more was spent than earned.
    pub balance: f64,
}

/// Compute the income, expense and balance totals over `transactions`.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut total_income = 0.0;
    let mut total_expense = 0.0;

    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Income => total_income += transaction.amount,
            TransactionKind::Expense => total_expense += transaction.amount,
        }
    }

    Summary {
        total_income,
        total_expense,
        balance: total_income - total_expense,
    }
}

/// Sum the expense amounts per category.
///
/// Categories appear in the order they first occur in `transactions`, and
/// only categories with at least one expense appear at all. Income does not
/// contribute, a category that only ever received income is absent.
pub fn expense_category_totals(transactions: &[Transaction]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();

    for transaction in transactions {
        if transaction.kind != TransactionKind::Expense {
            continue;
        }

        match totals
            .iter_mut()
            .find(|(category, _)| *category == transaction.category)
        {
            Some((_, total)) => *total += transaction.amount,
            None => totals.push((transaction.category.clone(), transaction.amount)),
        }
    }

    totals
}
