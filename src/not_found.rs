use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// The fallback handler for routes that do not exist.
pub async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        error_view(
            "Not Found",
            "404",
            "Sorry, that page does not exist.",
            "Head back to the dashboard to manage your budget.",
        ),
    )
        .into_response()
}
