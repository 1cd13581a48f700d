use maud::{Markup, html};

use crate::{
    Transaction, TransactionKind, endpoints,
    endpoints::format_endpoint,
    html::{
        BUTTON_DELETE_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        format_currency,
    },
};

/// Renders the transaction table in insertion order, oldest first.
pub(super) fn transactions_table_view(transactions: &[Transaction]) -> Markup {
    html! {
        section class="w-full max-w-3xl mb-8" {
            h3 class="text-xl font-semibold mb-4" { "Transactions" }

            div class="relative overflow-x-auto shadow-md rounded-lg"
            {
                table class="w-full text-sm text-left rtl:text-right
                    text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class="px-6 py-3" { "Description" }
                            th scope="col" class="px-6 py-3" { "Category" }
                            th scope="col" class="px-6 py-3 text-right" { "Amount" }
                            th scope="col" class="px-6 py-3"
                            {
                                span class="sr-only" { "Actions" }
                            }
                        }
                    }

                    tbody
                    {
                        @for transaction in transactions {
                            (transaction_row_view(transaction))
                        }

                        @if transactions.is_empty() {
                            tr
                            {
                                td
                                    colspan="4"
                                    data-empty-state="true"
                                    class="px-6 py-4 text-center"
                                {
                                    "No transactions yet. Add your first one above."
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn transaction_row_view(transaction: &Transaction) -> Markup {
    let (amount_str, amount_class) = match transaction.kind {
        TransactionKind::Income => (
            format!("+{}", format_currency(transaction.amount)),
            "text-green-600 dark:text-green-400",
        ),
        TransactionKind::Expense => (
            format_currency(-transaction.amount),
            "text-red-600 dark:text-red-400",
        ),
    };

    let confirm_message = format!(
        "Are you sure you want to delete the transaction '{}'? This cannot be undone.",
        transaction.description
    );

    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-row="true"
        {
            td class=(TABLE_CELL_STYLE) { (transaction.description) }
            td class=(TABLE_CELL_STYLE) { (transaction.category) }
            td class={ "px-6 py-4 text-right font-medium " (amount_class) } { (amount_str) }
            td class=(TABLE_CELL_STYLE)
            {
                button
                    hx-delete=(format_endpoint(endpoints::DELETE_TRANSACTION, transaction.id))
                    hx-confirm=(confirm_message)
                    hx-target-error="#alert-container"
                    class=(BUTTON_DELETE_STYLE)
                {
                    "Delete"
                }
            }
        }
    }
}
