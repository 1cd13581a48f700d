//! Card components for the income, expense and balance totals.

use maud::{Markup, html};

use crate::{html::format_currency, summary::Summary};

const CARD_STYLE: &str = "bg-white dark:bg-gray-800 border border-gray-200 \
    dark:border-gray-700 rounded-lg p-4 shadow-md flex flex-col gap-1";

/// Renders the three summary cards at the top of the dashboard.
///
/// The figures are formatted to two decimal places. The balance changes
/// color with its sign.
pub(super) fn summary_cards_view(summary: &Summary) -> Markup {
    let balance_style = if summary.balance < 0.0 {
        "text-2xl font-bold text-red-600 dark:text-red-400"
    } else {
        "text-2xl font-bold text-green-600 dark:text-green-400"
    };

    html! {
        section class="w-full grid grid-cols-1 sm:grid-cols-3 gap-4 mb-8" {
            div class=(CARD_STYLE) {
                span class="text-sm text-gray-600 dark:text-gray-400" { "Total Income" }
                span id="total-income" class="text-2xl font-bold text-green-600 dark:text-green-400" {
                    (format_currency(summary.total_income))
                }
            }

            div class=(CARD_STYLE) {
                span class="text-sm text-gray-600 dark:text-gray-400" { "Total Expenses" }
                span id="total-expense" class="text-2xl font-bold text-red-600 dark:text-red-400" {
                    (format_currency(summary.total_expense))
                }
            }

            div class=(CARD_STYLE) {
                span class="text-sm text-gray-600 dark:text-gray-400" { "Balance" }
                span id="balance" class=(balance_style) {
                    (format_currency(summary.balance))
                }
            }
        }
    }
}
