//! Application router configuration.

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    home_page::{get_fallback_page, get_home_page},
    logging::logging_middleware,
    transaction::{create_transaction_endpoint, delete_transaction_endpoint},
};

/// Return a router with all the app's routes.
///
/// `GET` requests that match no route are served from the assets directory,
/// and paths without a file there get the entry document, so links into the
/// page never 404. The entry document for a missing file-like path is
/// rendered without calling the backend.
pub fn build_router(state: AppState) -> Router {
    let entry_document = get(get_fallback_page).with_state(state.clone());
    let static_files = ServeDir::new(&state.assets_dir)
        .append_index_html_on_directories(false)
        .fallback(entry_document);

    Router::new()
        .route(endpoints::ROOT, get(get_home_page))
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(endpoints::TRANSACTION, delete(delete_transaction_endpoint))
        .route_layer(middleware::from_fn(logging_middleware))
        .fallback_service(static_files)
        .with_state(state)
}
