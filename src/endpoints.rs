//! The URIs served by this app.
//!
//! For endpoints that take a parameter, e.g., '/api/transactions/{transaction_id}', use [format_endpoint].

/// The entry document: the dashboard with the form, totals and table.
pub const ROOT: &str = "/";
/// The route for creating transactions.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route for a single transaction.
pub const TRANSACTION: &str = "/api/transactions/{transaction_id}";

/// Replace the first `{parameter}` in `endpoint_path` with `id`.
///
/// If `endpoint_path` has no parameter it is returned unchanged. An opening
/// brace without a closing one consumes the rest of the path.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{id}{}",
        &endpoint_path[..param_start],
        &endpoint_path[param_end..]
    )
}
