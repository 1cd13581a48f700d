//! Dashboard module
//!
//! Provides the single page of the app: the income, expense and balance
//! cards, the form for adding a transaction, the transaction table and the
//! expenses chart.

mod cards;
mod chart;
mod form;
mod handlers;
mod table;

pub use handlers::get_dashboard_page;
