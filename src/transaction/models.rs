//! The transaction model as exchanged with the backend.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::category::CategoryId;

/// The backend's ID for a transaction.
pub type TransactionId = i64;

/// Whether money came in or went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    /// Money received, "RECEITA" on the wire.
    #[serde(rename = "RECEITA")]
    Income,
    /// Money spent, "DESPESA" on the wire.
    #[serde(rename = "DESPESA")]
    Expense,
}

impl TransactionType {
    /// The name used by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "RECEITA",
            TransactionType::Expense => "DESPESA",
        }
    }

    /// The name used in sentences, e.g. "Receita de R$ 10,00".
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Income => "Receita",
            TransactionType::Expense => "Despesa",
        }
    }

    /// The emoji shown next to the type in badges and suggestions.
    pub fn emoji(&self) -> &'static str {
        match self {
            TransactionType::Income => "💰",
            TransactionType::Expense => "💸",
        }
    }

    /// The sign shown in front of amounts of this type.
    pub fn sign(&self) -> &'static str {
        match self {
            TransactionType::Income => "+",
            TransactionType::Expense => "-",
        }
    }
}

/// An income or expense as listed by the backend.
///
/// The category name and color are copied onto the transaction by the
/// backend so the table can be rendered without looking up categories.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Transaction {
    /// The ID assigned by the backend.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    #[serde(rename = "descricao")]
    pub description: String,
    /// The amount of money, always positive. The type gives the direction.
    #[serde(rename = "valor")]
    pub amount: f64,
    /// Whether money came in or went out.
    #[serde(rename = "tipo")]
    pub type_: TransactionType,
    /// When the transaction happened.
    #[serde(rename = "data")]
    pub date: Date,
    /// The category this transaction belongs to.
    #[serde(rename = "categoriaId", default)]
    pub category_id: Option<CategoryId>,
    /// The name of the category.
    #[serde(rename = "categoriaNome", default)]
    pub category_name: Option<String>,
    /// The hex color of the category.
    #[serde(rename = "categoriaCor", default)]
    pub category_color: Option<String>,
    /// Free text notes.
    #[serde(rename = "observacoes", default)]
    pub notes: Option<String>,
}

/// The data sent to the backend to create a transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTransaction {
    /// A text description of what the transaction was for.
    #[serde(rename = "descricao")]
    pub description: String,
    /// The amount of money, always positive.
    #[serde(rename = "valor")]
    pub amount: f64,
    /// Whether money came in or went out.
    #[serde(rename = "tipo")]
    pub type_: TransactionType,
    /// When the transaction happened.
    #[serde(rename = "data")]
    pub date: Date,
    /// The category the transaction belongs to. It must already exist.
    #[serde(rename = "categoriaId")]
    pub category_id: CategoryId,
    /// Free text notes, sent as `null` when absent.
    #[serde(rename = "observacoes")]
    pub notes: Option<String>,
}

/// The transactions ordered by date, newest first.
///
/// Transactions on the same date keep their original order.
pub fn sort_newest_first(transactions: &[Transaction]) -> Vec<&Transaction> {
    let mut sorted = transactions.iter().collect::<Vec<_>>();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}
