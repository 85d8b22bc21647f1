//! Totals for income, expenses and the resulting balance.

use maud::{Markup, html};

use crate::{
    html::{CARD_STYLE, format_currency},
    transaction::{Transaction, TransactionType},
};

const POSITIVE_BALANCE_BACKGROUND: &str = "linear-gradient(135deg, #4CAF50 0%, #45a049 100%)";
const NEGATIVE_BALANCE_BACKGROUND: &str = "linear-gradient(135deg, #f44336 0%, #da190b 100%)";

/// The totals over a list of transactions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// The sum of all income.
    pub total_income: f64,
    /// The sum of all expenses.
    pub total_expenses: f64,
    /// Income minus expenses.
    pub balance: f64,
}

impl Summary {
    /// Add up `transactions` by type.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let total_of = |type_: TransactionType| {
            transactions
                .iter()
                .filter(|transaction| transaction.type_ == type_)
                .map(|transaction| transaction.amount)
                .sum::<f64>()
        };

        let total_income = total_of(TransactionType::Income);
        let total_expenses = total_of(TransactionType::Expense);

        Self {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
        }
    }

    /// Zero counts as non-negative.
    pub fn is_balance_non_negative(&self) -> bool {
        self.balance >= 0.0
    }

    /// The CSS background for the balance card, green unless the balance is negative.
    pub fn balance_background(&self) -> &'static str {
        if self.is_balance_non_negative() {
            POSITIVE_BALANCE_BACKGROUND
        } else {
            NEGATIVE_BALANCE_BACKGROUND
        }
    }
}

/// Renders the income, expense and balance cards.
///
/// The balance is shown without a sign, the card color tells whether it is negative.
pub fn summary_view(summary: &Summary) -> Markup {
    html! {
        section id="summary" class="grid grid-cols-1 md:grid-cols-3 gap-4 w-full"
        {
            div class=(CARD_STYLE) style="background: linear-gradient(135deg, #43a047 0%, #2e7d32 100%)"
            {
                h3 class="text-sm font-medium uppercase" { "💰 Receitas" }
                p id="total-receitas" class="text-2xl font-bold mt-2"
                {
                    (format_currency(summary.total_income))
                }
            }

            div class=(CARD_STYLE) style="background: linear-gradient(135deg, #e53935 0%, #c62828 100%)"
            {
                h3 class="text-sm font-medium uppercase" { "💸 Despesas" }
                p id="total-despesas" class="text-2xl font-bold mt-2"
                {
                    (format_currency(summary.total_expenses))
                }
            }

            div
                id="saldo-card"
                class=(CARD_STYLE)
                style=(format!("background: {}", summary.balance_background()))
            {
                h3 class="text-sm font-medium uppercase" { "📊 Saldo" }
                p id="saldo" class="text-2xl font-bold mt-2"
                {
                    (format_currency(summary.balance.abs()))
                }
            }
        }
    }
}
