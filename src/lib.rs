//! A web app for tracking personal income and expenses.
//!
//! This library serves a single page that lists transactions, a form for
//! adding new ones and a summary of the totals. Transactions and categories
//! are stored by an external REST backend, this crate only talks to it over
//! HTTP and renders the results as HTML.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::{HxReswap, SwapOption};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod api;
mod app_state;
mod category;
mod dashboard;
mod endpoints;
mod environment;
mod home_page;
mod html;
mod logging;
mod routing;
mod summary;
mod timezone;
mod tracker;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use api::{ApiError, FinanceApi, HttpFinanceApi};
pub use app_state::{AppState, Backends};
pub use category::{Category, CategoryId, NewCategory};
pub use environment::{BackendUrls, DEFAULT_DEPLOYED_BACKEND_URL, DEFAULT_LOCAL_BACKEND_URL};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use summary::Summary;
pub use tracker::FinanceTracker;
pub use transaction::{NewTransaction, Transaction, TransactionId, TransactionType};

use crate::{alert::Alert, html::error_view};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The user submitted a transaction without a category name.
    #[error("Por favor, digite uma categoria!")]
    MissingCategoryName,

    /// A field in the transaction form failed validation.
    ///
    /// The string is shown to the user as is.
    #[error("{0}")]
    InvalidForm(String),

    /// The backend refused or failed to create a category that the
    /// transaction needs.
    #[error("could not create the category: {0}")]
    CategoryCreation(ApiError),

    /// The backend refused or failed to create a transaction.
    #[error("could not create the transaction: {0}")]
    TransactionCreation(ApiError),

    /// The backend refused or failed to delete a transaction.
    #[error("could not delete the transaction: {0}")]
    TransactionDeletion(ApiError),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidTimezoneError(timezone) => {
                tracing::error!("Could not get local timezone \"{timezone}\"");
                let page = error_view(
                    "Erro interno",
                    "500",
                    "Configuração de fuso horário inválida",
                    &format!(
                        "O fuso horário \"{timezone}\" não é válido. Verifique a configuração do \
                        servidor."
                    ),
                );
                (StatusCode::INTERNAL_SERVER_ERROR, page).into_response()
            }
            error => error.into_alert_response(),
        }
    }
}

impl Error {
    /// The message shown to the user for this error.
    ///
    /// Messages sent by the backend are passed through unchanged.
    pub fn user_message(&self) -> String {
        match self {
            Error::MissingCategoryName | Error::InvalidForm(_) => self.to_string(),
            Error::CategoryCreation(_) => "Erro ao criar categoria".to_owned(),
            Error::TransactionCreation(error) => error
                .message()
                .unwrap_or("Erro ao criar transação")
                .to_owned(),
            Error::TransactionDeletion(_) => "Erro ao deletar transação".to_owned(),
            Error::InvalidTimezoneError(timezone) => {
                format!("Fuso horário inválido: \"{timezone}\"")
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingCategoryName | Error::InvalidForm(_) => StatusCode::BAD_REQUEST,
            Error::CategoryCreation(error)
            | Error::TransactionCreation(error)
            | Error::TransactionDeletion(error) => error.status_code(),
            Error::InvalidTimezoneError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Render the error as an alert fragment for htmx to swap into the alert container.
    ///
    /// The forms swap their target with `outerHTML`, so the response sets the
    /// swap to `innerHTML` to keep the alert container in the page.
    fn into_alert_response(self) -> Response {
        let status_code = self.status_code();
        let alert = Alert::Error {
            message: self.user_message(),
            details: String::new(),
        };

        (
            status_code,
            HxReswap(SwapOption::InnerHtml),
            alert.into_html(),
        )
            .into_response()
    }
}
