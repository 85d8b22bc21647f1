//! Defines the endpoint for adding a transaction.

use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;

use crate::{
    alert::Alert,
    app_state::DashboardState,
    dashboard::dashboard_with_alert,
    environment::Environment,
    html::format_currency,
    timezone::local_today,
    transaction::{Transaction, form::TransactionForm},
};

/// A route handler for adding a transaction.
///
/// Responds with the refreshed dashboard and a success modal, or with an
/// error alert that leaves the form as the user filled it in.
pub async fn create_transaction_endpoint(
    State(state): State<DashboardState>,
    headers: HeaderMap,
    Form(form): Form<TransactionForm>,
) -> Response {
    let today = match local_today(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_alert_response(),
    };

    let input = match form.into_input() {
        Ok(input) => input,
        Err(error) => {
            tracing::warn!("Rejected transaction form: {error}");
            return error.into_alert_response();
        }
    };

    let tracker = state
        .backends
        .tracker(Environment::from_headers(&headers));

    let transaction = match tracker.add_transaction(input).await {
        Ok(transaction) => transaction,
        Err(error) => {
            tracing::error!("Could not add transaction: {error}");
            return error.into_alert_response();
        }
    };

    let alert = Alert::Success {
        message: success_message(&transaction),
        details: String::new(),
    };

    dashboard_with_alert(&tracker.snapshot(), today, alert).into_response()
}

fn success_message(transaction: &Transaction) -> String {
    format!(
        "{} de {} adicionada com sucesso!",
        transaction.type_.label(),
        format_currency(transaction.amount)
    )
}
