//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - The route handler for displaying the dashboard
//! - HTML view functions for assembling the page
//! - State and query types used by the handler

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;
use std::sync::{Arc, Mutex};

use crate::{
    AppState, Error, Transaction, TransactionStore,
    alert::Flash,
    dashboard::{
        cards::summary_cards_view,
        chart::{ECHARTS_SCRIPT_URL, category_chart, charts_script},
        form::transaction_form_view,
        table::transactions_table_view,
    },
    html::{HeadElement, PAGE_CONTAINER_STYLE, base, dollar_input_styles},
    summary::{expense_category_totals, summarize},
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The in-memory transaction store.
    pub store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// Query parameters for the dashboard page.
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// The flash value a redirect tacked on, e.g. "added".
    #[serde(default)]
    pub alert: Option<String>,
}

/// Display the dashboard: the totals, the form for adding a transaction,
/// the transaction table and the expenses chart.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, Error> {
    let store = state
        .store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?;

    let flash = query.alert.as_deref().and_then(Flash::from_param);

    Ok(dashboard_view(store.list(), flash).into_response())
}

/// Renders the whole dashboard page.
///
/// Every figure on the page is recomputed from `transactions`, and the chart
/// section is left out entirely when there are no expenses to plot.
fn dashboard_view(transactions: &[Transaction], flash: Option<Flash>) -> Markup {
    let summary = summarize(transactions);
    let category_totals = expense_category_totals(transactions);
    let chart = (!category_totals.is_empty()).then(|| category_chart(&category_totals));

    let content = html!(
        div class=(PAGE_CONTAINER_STYLE)
        {
            header class="w-full max-w-3xl mb-6 flex items-baseline justify-between"
            {
                h1 class="text-3xl font-bold" { "Centsible" }
                span class="text-sm text-gray-600 dark:text-gray-400"
                {
                    "Personal budget tracker"
                }
            }

            @if let Some(flash) = flash {
                div class="w-full max-w-3xl mb-4" { (flash.into_alert().into_markup()) }
            }

            div class="w-full max-w-3xl" { (summary_cards_view(&summary)) }

            (transaction_form_view())

            (transactions_table_view(transactions))

            @if let Some(chart) = &chart {
                section id="chart-section" class="w-full max-w-3xl mb-8"
                {
                    div
                        id=(chart.id)
                        class="min-h-[380px] rounded dark:bg-gray-100"
                    {}
                }
            }
        }
    );

    let mut head_elements = vec![dollar_input_styles()];

    if let Some(chart) = &chart {
        head_elements.push(HeadElement::ScriptLink(ECHARTS_SCRIPT_URL.to_owned()));
        head_elements.push(charts_script(std::slice::from_ref(chart)));
    }

    base("Dashboard", &head_elements, &content)
}
