//! The category model, the default categories and the color palettes.

use std::{
    collections::hash_map::RandomState,
    hash::{BuildHasher, Hasher},
};

use serde::{Deserialize, Serialize};

use crate::transaction::TransactionType;

/// The backend's ID for a category.
pub type CategoryId = i64;

/// A grouping for transactions, e.g. "Salário" or "Transporte".
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Category {
    /// The ID assigned by the backend.
    pub id: CategoryId,
    /// The display name. Names are compared without regard to case.
    #[serde(rename = "nome")]
    pub name: String,
    /// A longer description of the category.
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    /// Whether the category is for income or expenses.
    #[serde(rename = "tipo")]
    pub type_: TransactionType,
    /// The hex color used for the category's badge.
    #[serde(rename = "cor", default)]
    pub color: Option<String>,
}

/// The data sent to the backend to create a category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCategory {
    /// The display name.
    #[serde(rename = "nome")]
    pub name: String,
    /// A longer description of the category.
    #[serde(rename = "descricao")]
    pub description: String,
    /// Whether the category is for income or expenses.
    #[serde(rename = "tipo")]
    pub type_: TransactionType,
    /// The hex color used for the category's badge.
    #[serde(rename = "cor")]
    pub color: String,
}

impl NewCategory {
    /// A category created on the fly for a transaction, with a description
    /// derived from `name`.
    pub fn for_transaction(name: &str, type_: TransactionType, color: &str) -> Self {
        Self {
            name: name.to_owned(),
            description: format!("Categoria {name}"),
            type_,
            color: color.to_owned(),
        }
    }
}

/// A category that is created when the backend has none.
pub struct DefaultCategory {
    pub name: &'static str,
    pub description: &'static str,
    pub type_: TransactionType,
    pub color: &'static str,
}

impl DefaultCategory {
    pub fn to_new_category(&self) -> NewCategory {
        NewCategory {
            name: self.name.to_owned(),
            description: self.description.to_owned(),
            type_: self.type_,
            color: self.color.to_owned(),
        }
    }
}

/// The categories created, in order, when the backend has no categories.
pub const DEFAULT_CATEGORIES: [DefaultCategory; 7] = [
    DefaultCategory {
        name: "Salário",
        description: "Salário mensal",
        type_: TransactionType::Income,
        color: "#4CAF50",
    },
    DefaultCategory {
        name: "Freelance",
        description: "Trabalhos extras",
        type_: TransactionType::Income,
        color: "#8BC34A",
    },
    DefaultCategory {
        name: "Investimentos",
        description: "Rendimentos",
        type_: TransactionType::Income,
        color: "#009688",
    },
    DefaultCategory {
        name: "Alimentação",
        description: "Gastos com alimentação",
        type_: TransactionType::Expense,
        color: "#FF5722",
    },
    DefaultCategory {
        name: "Transporte",
        description: "Gastos com transporte",
        type_: TransactionType::Expense,
        color: "#FF9800",
    },
    DefaultCategory {
        name: "Moradia",
        description: "Aluguel, contas, etc",
        type_: TransactionType::Expense,
        color: "#F44336",
    },
    DefaultCategory {
        name: "Lazer",
        description: "Entretenimento",
        type_: TransactionType::Expense,
        color: "#9C27B0",
    },
];

const INCOME_PALETTE: [&str; 5] = ["#4CAF50", "#8BC34A", "#009688", "#00BCD4", "#4DD0E1"];
const EXPENSE_PALETTE: [&str; 5] = ["#F44336", "#FF5722", "#FF9800", "#9C27B0", "#E91E63"];

/// The colors a new category of `type_` may be given.
pub fn palette(type_: TransactionType) -> &'static [&'static str] {
    match type_ {
        TransactionType::Income => &INCOME_PALETTE,
        TransactionType::Expense => &EXPENSE_PALETTE,
    }
}

/// Pick a color from the palette for `type_` using `seed`.
pub fn pick_color(type_: TransactionType, seed: u64) -> &'static str {
    let colors = palette(type_);
    colors[(seed % colors.len() as u64) as usize]
}

/// A seed for [pick_color] that differs between calls.
pub fn random_seed() -> u64 {
    let mut hasher = RandomState::new().build_hasher();
    hasher.write_u64(0);
    hasher.finish()
}

/// Find the category called `name`, ignoring case and surrounding whitespace.
///
/// The type of the category is not considered.
pub fn find_category_by_name<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
    let name = name.trim().to_lowercase();

    categories
        .iter()
        .find(|category| category.name.trim().to_lowercase() == name)
}
