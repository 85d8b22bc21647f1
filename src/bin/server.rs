use std::{fs::OpenOptions, net::SocketAddr, path::PathBuf, sync::Arc};

use axum::{
    Router,
    extract::{MatchedPath, Request},
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use finance_tracker::{
    AppState, BackendUrls, DEFAULT_DEPLOYED_BACKEND_URL, DEFAULT_LOCAL_BACKEND_URL, build_router,
    graceful_shutdown,
};

/// The web server for the personal finance tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The port to serve the app from.
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// The directory with the static files, e.g. the stylesheet.
    #[arg(long, env = "ASSETS_DIR", default_value = "static")]
    assets_dir: PathBuf,

    /// The backend used when the app is opened on localhost.
    #[arg(long, env = "LOCAL_BACKEND_URL", default_value = DEFAULT_LOCAL_BACKEND_URL)]
    local_backend_url: String,

    /// The backend used when the app is opened on any other host.
    #[arg(long, env = "BACKEND_URL", default_value = DEFAULT_DEPLOYED_BACKEND_URL)]
    deployed_backend_url: String,

    /// The canonical name of the local timezone, used to decide what today is.
    #[arg(long, env = "TIMEZONE", default_value = "America/Sao_Paulo")]
    timezone: String,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));

    if !args.assets_dir.is_dir() {
        tracing::warn!(
            "Assets directory {} does not exist, only the entry document will be served.",
            args.assets_dir.display()
        );
    }

    let urls = BackendUrls {
        local: args.local_backend_url,
        deployed: args.deployed_backend_url,
    };
    tracing::info!(
        "Using backends {} (local) and {} (deployed)",
        urls.local,
        urls.deployed
    );
    let state = AppState::new(urls, &args.timezone, args.assets_dir);

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(state));

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    tracing::info!("HTTP server listening on {}", addr);
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .expect("Could not start the server.");
}

fn setup_logging() {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("debug.log")
        .expect("Could not create log file");

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(filter::LevelFilter::INFO)
                .and_then(debug_log)
                .with_filter(filter::LevelFilter::DEBUG),
        )
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but the handlers
        // already log their errors.
        .on_failure(());

    router.layer(tracing_layer)
}
