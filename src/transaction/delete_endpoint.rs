use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert,
    app_state::DashboardState,
    dashboard::dashboard_with_alert,
    environment::Environment,
    timezone::local_today,
    transaction::TransactionId,
};

/// A route handler for deleting a transaction.
///
/// Responds with the refreshed dashboard and a success modal, or with an error alert.
pub async fn delete_transaction_endpoint(
    State(state): State<DashboardState>,
    headers: HeaderMap,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let today = match local_today(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_alert_response(),
    };

    let tracker = state
        .backends
        .tracker(Environment::from_headers(&headers));

    if let Err(error) = tracker.delete_transaction(transaction_id).await {
        tracing::error!("Could not delete transaction {transaction_id}: {error}");
        return error.into_alert_response();
    }

    let alert = Alert::Success {
        message: "Transação deletada com sucesso!".to_owned(),
        details: String::new(),
    };

    dashboard_with_alert(&tracker.snapshot(), today, alert).into_response()
}
