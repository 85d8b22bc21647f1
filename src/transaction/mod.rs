//! Transactions: the model, the form for adding them, the table listing
//! them and the endpoints that change them.

mod create_endpoint;
mod delete_endpoint;
mod form;
mod models;
mod table;

pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use form::transaction_form_view;
pub use models::{NewTransaction, Transaction, TransactionId, TransactionType, sort_newest_first};
pub use table::transactions_table_view;
