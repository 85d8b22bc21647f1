//! The entry document served for `/` and every path without a static file.

use axum::{
    extract::State,
    http::{HeaderMap, Uri},
    response::{IntoResponse, Response},
};
use axum_htmx::HxRequest;
use maud::{Markup, html};

use crate::{
    app_state::DashboardState,
    dashboard::dashboard_view,
    environment::{Environment, footer_links},
    html::{PAGE_CONTAINER_STYLE, base, link},
    timezone::local_today,
    tracker::{ApiStatus, TrackerSnapshot},
};

/// Display the dashboard for the backend that matches the request's host.
///
/// The tracker is initialized on every load, so the page always shows the
/// backend's current data. htmx requests only get the dashboard fragment.
pub async fn get_home_page(
    State(state): State<DashboardState>,
    HxRequest(is_htmx_request): HxRequest,
    headers: HeaderMap,
) -> Response {
    render_home_page(&state, is_htmx_request, &headers, true).await
}

/// The entry document for paths that match neither a route nor a static file.
///
/// Paths that look like files, e.g. "/favicon.ico", are answered from the
/// cached data without calling the backend.
pub async fn get_fallback_page(
    State(state): State<DashboardState>,
    HxRequest(is_htmx_request): HxRequest,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    let load_from_backend = !looks_like_file(uri.path());

    render_home_page(&state, is_htmx_request, &headers, load_from_backend).await
}

async fn render_home_page(
    state: &DashboardState,
    is_htmx_request: bool,
    headers: &HeaderMap,
    load_from_backend: bool,
) -> Response {
    let today = match local_today(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_response(),
    };

    let environment = Environment::from_headers(headers);
    let tracker = state.backends.tracker(environment);
    let snapshot = if load_from_backend {
        tracker.initialize().await
    } else {
        tracker.snapshot()
    };

    if is_htmx_request {
        return dashboard_view(&snapshot, today).into_response();
    }

    let backend_url = state.backends.base_url(environment);
    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            (header_view(&snapshot))
            (dashboard_view(&snapshot, today))
            (footer_view(environment, backend_url))
        }
    };

    base("Início", &content).into_response()
}

/// Whether the last segment of `path` has a file extension.
fn looks_like_file(path: &str) -> bool {
    let last_segment = path.rsplit('/').next().unwrap_or_default();

    match last_segment.rsplit_once('.') {
        Some((stem, extension)) => !stem.is_empty() && !extension.is_empty(),
        None => false,
    }
}

fn header_view(snapshot: &TrackerSnapshot) -> Markup {
    let (status_text, status_style) = match snapshot.api_status {
        ApiStatus::Online => ("● API Online", "text-green-600 dark:text-green-400"),
        ApiStatus::Offline => ("● API Offline", "text-red-600 dark:text-red-400"),
        ApiStatus::Unknown => ("● Verificando API...", "text-gray-500"),
    };

    html! {
        header class="w-full max-w-5xl flex flex-wrap justify-between items-center mb-6"
        {
            h1 class="text-3xl font-bold" { "💰 Controle Financeiro" }

            span id="api-status" class={ "font-medium " (status_style) }
            {
                (status_text)
            }
        }
    }
}

fn footer_view(environment: Environment, backend_url: &str) -> Markup {
    html! {
        footer class="w-full max-w-5xl mt-8 flex flex-wrap gap-4 justify-center text-sm"
        {
            @for footer_link in footer_links(environment, backend_url) {
                (link(&footer_link.url, footer_link.text))
            }
        }
    }
}
