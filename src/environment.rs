//! Which backend a request should talk to.
//!
//! The app is served both on a developer's machine and on a public host.
//! Requests made to localhost use the backend running next to it, all
//! others use the deployed backend.

use axum::http::{HeaderMap, header::HOST};

/// The backend used when the app is opened on localhost.
pub const DEFAULT_LOCAL_BACKEND_URL: &str = "http://localhost:8081";
/// The backend used everywhere else.
pub const DEFAULT_DEPLOYED_BACKEND_URL: &str = "https://controle-financeiro-dl2j.onrender.com";

const SWAGGER_UI_PATH: &str = "/swagger-ui/index.html";
const H2_CONSOLE_PATH: &str = "/h2-console";

/// Where the app is being viewed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// The host is "localhost" or "127.0.0.1".
    Local,
    /// Any other host.
    Deployed,
}

impl Environment {
    /// Pick the environment from a host name, with or without a port.
    pub fn from_host(host: &str) -> Self {
        let hostname = strip_port(host.trim());

        if hostname.eq_ignore_ascii_case("localhost") || hostname == "127.0.0.1" {
            Environment::Local
        } else {
            Environment::Deployed
        }
    }

    /// Pick the environment from the `Host` header of a request.
    ///
    /// A missing or unreadable header counts as deployed.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(HOST)
            .and_then(|host| host.to_str().ok())
            .map(Self::from_host)
            .unwrap_or(Environment::Deployed)
    }
}

fn strip_port(host: &str) -> &str {
    // IPv6 literals are never local here, so only "name:port" needs handling.
    match host.rsplit_once(':') {
        Some((hostname, port)) if port.chars().all(|c| c.is_ascii_digit()) => hostname,
        _ => host,
    }
}

/// The base URLs of the two backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendUrls {
    /// The backend for [Environment::Local].
    pub local: String,
    /// The backend for [Environment::Deployed].
    pub deployed: String,
}

impl Default for BackendUrls {
    fn default() -> Self {
        Self {
            local: DEFAULT_LOCAL_BACKEND_URL.to_owned(),
            deployed: DEFAULT_DEPLOYED_BACKEND_URL.to_owned(),
        }
    }
}

impl BackendUrls {
    /// The base URL for `environment`.
    pub fn url_for(&self, environment: Environment) -> &str {
        match environment {
            Environment::Local => &self.local,
            Environment::Deployed => &self.deployed,
        }
    }
}

/// A link shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterLink {
    pub url: String,
    pub text: &'static str,
}

/// The links to the backend's tooling.
///
/// Swagger is always linked, the H2 database console only exists on the local backend.
pub fn footer_links(environment: Environment, base_url: &str) -> Vec<FooterLink> {
    let base_url = base_url.trim_end_matches('/');
    let mut links = vec![FooterLink {
        url: format!("{base_url}{SWAGGER_UI_PATH}"),
        text: "📚 Documentação da API (Swagger)",
    }];

    if environment == Environment::Local {
        links.push(FooterLink {
            url: format!("{base_url}{H2_CONSOLE_PATH}"),
            text: "🗄️ Console H2",
        });
    }

    links
}
