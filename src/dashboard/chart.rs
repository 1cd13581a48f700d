//! Chart generation and rendering for the dashboard.
//!
//! The dashboard shows a single pie chart of expenses grouped by category.
//! The chart is generated as JSON configuration for the ECharts library and
//! rendered into an HTML container by a small initialization script.

use charming::{
    Chart,
    component::{Legend, Title},
    element::{JsFunction, Tooltip, Trigger},
    series::Pie,
};
use maud::PreEscaped;

use crate::html::HeadElement;

/// The ECharts library the chart script expects to be loaded.
pub(super) const ECHARTS_SCRIPT_URL: &str =
    "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Creates the expenses by category pie chart.
///
/// `category_totals` pairs each category name with the total spent on it,
/// in first-spent order. The caller skips the chart entirely when the list
/// is empty.
pub(super) fn category_chart(category_totals: &[(String, f64)]) -> DashboardChart {
    let data: Vec<(f64, &str)> = category_totals
        .iter()
        .map(|(category, total)| (*total, category.as_str()))
        .collect();

    let chart = Chart::new()
        .title(Title::new().text("Expenses by Category"))
        .tooltip(currency_tooltip())
        .legend(Legend::new().top("bottom"))
        .series(Pie::new().name("Expenses").radius("65%").data(data));

    DashboardChart {
        id: "category-chart",
        options: chart.to_string(),
    }
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Item)
        .value_formatter(currency_formatter())
}
