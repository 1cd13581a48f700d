use maud::{Markup, html};

use crate::{
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

/// Renders the form for adding a transaction.
///
/// The form posts to the transaction API. On success the server redirects
/// back to the dashboard, which re-renders everything and leaves the form
/// blank again. Validation errors are swapped into the alert container
/// without touching what the user typed.
pub(super) fn transaction_form_view() -> Markup {
    html! {
        section class="w-full max-w-3xl mb-8" {
            h3 class="text-xl font-semibold mb-4" { "Add Transaction" }

            form
                hx-post=(endpoints::TRANSACTIONS_API)
                hx-target-error="#alert-container"
                class="bg-white dark:bg-gray-800 border border-gray-200
                    dark:border-gray-700 rounded-lg p-4 shadow-md space-y-4"
            {
                div
                {
                    label
                        for="description"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Description"
                    }

                    input
                        name="description"
                        id="description"
                        type="text"
                        placeholder="e.g. Groceries"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label
                        for="amount"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Amount"
                    }

                    div class="input-wrapper w-full"
                    {
                        input
                            name="amount"
                            id="amount"
                            type="number"
                            step="0.01"
                            min="0.01"
                            placeholder="0.01"
                            required
                            class=(FORM_TEXT_INPUT_STYLE);
                    }
                }

                div
                {
                    label
                        for="category"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Category"
                    }

                    input
                        name="category"
                        id="category"
                        type="text"
                        placeholder="e.g. Food"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label
                        for="type"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Type"
                    }

                    select
                        name="type"
                        id="type"
                        class=(FORM_TEXT_INPUT_STYLE)
                    {
                        option value="expense" { "Expense" }
                        option value="income" { "Income" }
                    }
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Transaction" }
            }
        }
    }
}
