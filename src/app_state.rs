//! Implements a struct that holds the state of the web server.

use std::{path::PathBuf, sync::Arc};

use axum::extract::FromRef;

use crate::{
    FinanceApi, HttpFinanceApi,
    environment::{BackendUrls, Environment},
    tracker::FinanceTracker,
};

/// The state of the web server.
#[derive(Clone)]
pub struct AppState {
    /// The trackers for the local and deployed backends.
    pub backends: Arc<Backends>,

    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    pub local_timezone: String,

    /// The directory that static files are served from.
    pub assets_dir: PathBuf,
}

impl AppState {
    /// Create a new [AppState] that talks to the backends at `urls` over HTTP.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "America/Sao_Paulo".
    pub fn new(urls: BackendUrls, local_timezone: &str, assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            backends: Arc::new(Backends::new(urls)),
            local_timezone: local_timezone.to_owned(),
            assets_dir: assets_dir.into(),
        }
    }
}

/// One [FinanceTracker] per backend.
pub struct Backends {
    urls: BackendUrls,
    local: FinanceTracker,
    deployed: FinanceTracker,
}

impl Backends {
    /// Create trackers that use [HttpFinanceApi] for each URL in `urls`.
    pub fn new(urls: BackendUrls) -> Self {
        let local = Arc::new(HttpFinanceApi::new(&urls.local));
        let deployed = Arc::new(HttpFinanceApi::new(&urls.deployed));

        Self::with_apis(urls, local, deployed)
    }

    /// Create trackers for the given API clients. `urls` is only used for links.
    pub fn with_apis(
        urls: BackendUrls,
        local: Arc<dyn FinanceApi>,
        deployed: Arc<dyn FinanceApi>,
    ) -> Self {
        Self {
            urls,
            local: FinanceTracker::new(local),
            deployed: FinanceTracker::new(deployed),
        }
    }

    pub(crate) fn tracker(&self, environment: Environment) -> &FinanceTracker {
        match environment {
            Environment::Local => &self.local,
            Environment::Deployed => &self.deployed,
        }
    }

    pub(crate) fn base_url(&self, environment: Environment) -> &str {
        self.urls.url_for(environment)
    }
}

/// The state needed by the pages and endpoints that render the dashboard.
#[derive(Clone)]
pub struct DashboardState {
    pub backends: Arc<Backends>,
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            backends: state.backends.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}
