//! The REST backend that stores categories and transactions.
//!
//! The backend is an external service. [FinanceApi] describes the calls the
//! tracker makes against it and [HttpFinanceApi] makes those calls over HTTP.

mod http;

use async_trait::async_trait;
use axum::http::StatusCode;

use crate::{
    category::{Category, NewCategory},
    transaction::{NewTransaction, Transaction, TransactionId},
};

pub use http::HttpFinanceApi;

/// The operations the backend offers for categories and transactions.
#[async_trait]
pub trait FinanceApi: Send + Sync {
    /// Get every category.
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;

    /// Create a category and return it with its new ID.
    async fn create_category(&self, category: &NewCategory) -> Result<Category, ApiError>;

    /// Get every transaction, including the name and color of its category.
    async fn list_transactions(&self) -> Result<Vec<Transaction>, ApiError>;

    /// Create a transaction and return it with its new ID.
    async fn create_transaction(
        &self,
        transaction: &NewTransaction,
    ) -> Result<Transaction, ApiError>;

    /// Delete the transaction with `id`.
    async fn delete_transaction(&self, id: TransactionId) -> Result<(), ApiError>;
}

/// The ways a call to the backend can fail.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ApiError {
    /// The request never got a response, e.g. the connection was refused.
    #[error("could not reach the backend: {0}")]
    Unreachable(String),

    /// The backend answered with a non-success status code.
    ///
    /// `message` holds the `message` field of the JSON error body, if there was one.
    #[error("the backend responded with status {status}")]
    Status {
        /// The HTTP status code of the response.
        status: u16,
        /// The human readable message from the response body.
        message: Option<String>,
    },

    /// The response body could not be decoded.
    #[error("could not decode the backend response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The human readable message sent by the backend, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }

    /// The status code to use when relaying this error to the browser.
    ///
    /// Client errors from the backend mean the submitted data was rejected,
    /// anything else is the backend's fault.
    pub(crate) fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Status { status, .. } if (400..500).contains(status) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::BAD_GATEWAY,
        }
    }
}
