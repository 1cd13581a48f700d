//! Alert messages for the dashboard and for error responses.
//!
//! Alerts land in the `#alert-container` element, either rendered into the
//! page on load or swapped in by htmx when a request fails.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

const ALERT_BASE_STYLE: &str =
    "mb-2 flex items-start justify-between gap-4 rounded-lg border p-4 shadow-lg";
const ALERT_SUCCESS_STYLE: &str =
    "border-green-400 bg-green-100 text-green-800 dark:border-green-700 dark:bg-green-900 dark:text-green-200";
const ALERT_WARNING_STYLE: &str =
    "border-amber-400 bg-amber-100 text-amber-800 dark:border-amber-700 dark:bg-amber-900 dark:text-amber-200";
const ALERT_ERROR_STYLE: &str =
    "border-red-400 bg-red-100 text-red-800 dark:border-red-700 dark:bg-red-900 dark:text-red-200";

/// Alert message types for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Warning,
    Error,
}

/// An alert message with a one-line summary and optional details.
#[derive(Debug, Clone)]
pub struct Alert<'a> {
    kind: AlertKind,
    message: &'a str,
    details: &'a str,
    auto_dismiss: bool,
}

impl<'a> Alert<'a> {
    /// Create a new success alert.
    pub fn success(message: &'a str, details: &'a str) -> Self {
        Self {
            kind: AlertKind::Success,
            message,
            details,
            auto_dismiss: false,
        }
    }

    /// Create a new warning alert.
    pub fn warning(message: &'a str, details: &'a str) -> Self {
        Self {
            kind: AlertKind::Warning,
            message,
            details,
            auto_dismiss: false,
        }
    }

    /// Create a new error alert.
    pub fn error(message: &'a str, details: &'a str) -> Self {
        Self {
            kind: AlertKind::Error,
            message,
            details,
            auto_dismiss: false,
        }
    }

    /// Mark the alert to be removed from the page a few seconds after it is
    /// shown. Used for success messages that need no acknowledgement.
    pub fn auto_dismiss(mut self) -> Self {
        self.auto_dismiss = true;
        self
    }

    /// Render the alert.
    pub fn into_markup(self) -> Markup {
        let kind_style = match self.kind {
            AlertKind::Success => ALERT_SUCCESS_STYLE,
            AlertKind::Warning => ALERT_WARNING_STYLE,
            AlertKind::Error => ALERT_ERROR_STYLE,
        };

        html! {
            div role="alert" class={(ALERT_BASE_STYLE) " " (kind_style)} data-flash[self.auto_dismiss] {
                div {
                    p class="font-semibold" { (self.message) }
                    @if !self.details.is_empty() {
                        p class="mt-1 text-sm" { (self.details) }
                    }
                }
                button type="button" class="font-bold" aria-label="Dismiss"
                    onclick="this.closest('[role=alert]').remove()" { "\u{2715}" }
            }
        }
    }

    /// Render the alert as an HTTP response with the given status code.
    pub fn into_response(self, status: StatusCode) -> Response {
        (status, self.into_markup()).into_response()
    }
}

/// The outcome a redirect back to the dashboard wants shown to the user.
///
/// Carried in the `alert` query parameter so the message survives the
/// redirect after a create or delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    /// A transaction was added and saved.
    Added,
    /// The change went through but the ledger file could not be written.
    SaveFailed,
}

impl Flash {
    /// Parse the value of the `alert` query parameter.
    ///
    /// Unrecognized values produce `None` and are ignored by the dashboard.
    pub fn from_param(param: &str) -> Option<Self> {
        match param {
            "added" => Some(Flash::Added),
            "save-failed" => Some(Flash::SaveFailed),
            _ => None,
        }
    }

    /// The query string that carries this flash, e.g. `alert=added`.
    pub fn to_query(self) -> String {
        let value = match self {
            Flash::Added => "added",
            Flash::SaveFailed => "save-failed",
        };

        serde_urlencoded::to_string([("alert", value)])
            .unwrap_or_else(|_| format!("alert={value}"))
    }

    /// The alert to display for this flash.
    pub fn into_alert(self) -> Alert<'static> {
        match self {
            Flash::Added => {
                Alert::success("Transaction added", "Your transaction was recorded and saved.")
                    .auto_dismiss()
            }
            Flash::SaveFailed => Alert::warning(
                "Could not save your data",
                "The change was recorded but could not be written to the ledger file. \
                 Check the server logs for details.",
            ),
        }
    }
}

#[cfg(test)]
mod alert_tests {
    use axum::http::StatusCode;

    use super::Alert;

    #[test]
    fn markup_contains_message_and_details() {
        let markup = Alert::error("Missing description", "Enter a short description.")
            .into_markup()
            .into_string();

        assert!(markup.contains("Missing description"));
        assert!(markup.contains("Enter a short description."));
        assert!(markup.contains("role=\"alert\""));
    }

    #[test]
    fn markup_omits_empty_details() {
        let markup = Alert::success("Saved", "").into_markup().into_string();

        assert!(!markup.contains("text-sm"));
    }

    #[test]
    fn auto_dismiss_sets_flash_attribute() {
        let plain = Alert::success("Saved", "").into_markup().into_string();
        let flash = Alert::success("Saved", "")
            .auto_dismiss()
            .into_markup()
            .into_string();

        assert!(!plain.contains("data-flash"));
        assert!(flash.contains("data-flash"));
    }

    #[test]
    fn into_response_uses_given_status() {
        let response = Alert::error("Nope", "").into_response(StatusCode::BAD_REQUEST);

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[cfg(test)]
mod flash_tests {
    use super::Flash;

    #[test]
    fn from_param_recognizes_flash_values() {
        assert_eq!(Flash::from_param("added"), Some(Flash::Added));
        assert_eq!(Flash::from_param("save-failed"), Some(Flash::SaveFailed));
    }

    #[test]
    fn from_param_rejects_unknown_values() {
        assert_eq!(Flash::from_param("launch-missiles"), None);
        assert_eq!(Flash::from_param(""), None);
    }

    #[test]
    fn to_query_round_trips_through_from_param() {
        for flash in [Flash::Added, Flash::SaveFailed] {
            let query = flash.to_query();
            let (_, value) = query.split_once('=').unwrap();

            assert_eq!(Flash::from_param(value), Some(flash));
        }
    }
}
