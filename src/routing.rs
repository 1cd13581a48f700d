//! Application router configuration.

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::{
    AppState,
    dashboard::get_dashboard_page,
    endpoints,
    not_found::get_404_not_found,
    transaction::{create_transaction_endpoint, delete_transaction_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_dashboard_page))
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(
            endpoints::DELETE_TRANSACTION,
            delete(delete_transaction_endpoint),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}

#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use scraper::{Html, Selector};
    use tempfile::TempDir;

    use crate::{AppState, LedgerFile, build_router};

    fn test_server(directory: &TempDir) -> TestServer {
        let state = AppState::new(LedgerFile::new(directory.path().join("budget.json")));

        TestServer::new(build_router(state))
    }

    #[tokio::test]
    async fn create_view_and_delete_transaction_round_trip() {
        let directory = tempfile::tempdir().unwrap();
        let server = test_server(&directory);

        let response = server
            .post("/api/transactions")
            .form(&[
                ("description", "Coffee"),
                ("amount", "4.5"),
                ("category", "Food"),
                ("type", "expense"),
            ])
            .await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("hx-redirect"), "/?alert=added");

        let page = server.get("/").await;
        page.assert_status_ok();

        let row_selector = Selector::parse("tr[data-transaction-row]").unwrap();
        let html = Html::parse_document(&page.text());
        assert_eq!(html.select(&row_selector).count(), 1);
        assert!(page.text().contains("Coffee"));

        // Drive the delete through the URL the page actually renders
        let delete_selector = Selector::parse("button[hx-delete]").unwrap();
        let delete_url = html
            .select(&delete_selector)
            .next()
            .and_then(|button| button.value().attr("hx-delete"))
            .expect("row should have a delete button")
            .to_owned();

        let response = server.delete(&delete_url).await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("hx-redirect"), "/");

        let page = server.get("/").await;
        let html = Html::parse_document(&page.text());
        assert_eq!(html.select(&row_selector).count(), 0);
    }

    #[tokio::test]
    async fn create_with_blank_description_returns_alert() {
        let directory = tempfile::tempdir().unwrap();
        let server = test_server(&directory);

        let response = server
            .post("/api/transactions")
            .form(&[
                ("description", "   "),
                ("amount", "4.5"),
                ("category", "Food"),
                ("type", "expense"),
            ])
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.text().contains("Missing description"));
    }

    #[tokio::test]
    async fn unknown_route_returns_not_found() {
        let directory = tempfile::tempdir().unwrap();
        let server = test_server(&directory);

        let response = server.get("/tags").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
