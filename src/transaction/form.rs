use maud::{Markup, html};
use serde::Deserialize;
use time::Date;

use crate::{
    Error,
    category::{CATEGORY_SUGGESTIONS_ID, Category, category_suggestions_view},
    endpoints,
    html::{
        BUTTON_EXPENSE_STYLE, BUTTON_INCOME_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        loading_spinner,
    },
    tracker::TransactionInput,
    transaction::TransactionType,
};

/// The ID of the add-transaction form.
pub const TRANSACTION_FORM_ID: &str = "transaction-form";

/// The fields submitted by the add-transaction form.
///
/// The type comes from whichever of the two submit buttons was pressed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionForm {
    pub description: String,
    pub amount: f64,
    pub type_: TransactionType,
    pub date: Date,
    pub category: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl TransactionForm {
    /// Check the fields that the browser should already have checked.
    ///
    /// # Errors
    /// Returns [Error::MissingCategoryName] for a blank category and
    /// [Error::InvalidForm] for a blank description or an amount that is not positive.
    pub fn into_input(self) -> Result<TransactionInput, Error> {
        let description = self.description.trim();

        if description.is_empty() {
            return Err(Error::InvalidForm(
                "Por favor, digite uma descrição!".to_owned(),
            ));
        }

        if !(self.amount.is_finite() && self.amount > 0.0) {
            return Err(Error::InvalidForm(
                "O valor deve ser maior que zero!".to_owned(),
            ));
        }

        let category_name = self.category.trim();

        if category_name.is_empty() {
            return Err(Error::MissingCategoryName);
        }

        Ok(TransactionInput {
            description: description.to_owned(),
            amount: self.amount,
            type_: self.type_,
            date: self.date,
            category_name: category_name.to_owned(),
            notes: self.notes.filter(|notes| !notes.trim().is_empty()),
        })
    }
}

/// Renders an empty add-transaction form with the date set to `today`.
pub fn transaction_form_view(categories: &[Category], today: Date) -> Markup {
    let spinner = loading_spinner();

    html! {
        section class="w-full bg-white dark:bg-gray-800 rounded-lg shadow-md p-6"
        {
            h2 class="text-xl font-bold mb-4" { "➕ Nova Transação" }

            form
                id=(TRANSACTION_FORM_ID)
                hx-post=(endpoints::TRANSACTIONS_API)
                hx-target="#dashboard"
                hx-swap="outerHTML"
                hx-target-error="#alert-container"
                hx-disabled-elt="find button"
                class="grid grid-cols-1 md:grid-cols-2 gap-4"
            {
                div
                {
                    label for="description" class=(FORM_LABEL_STYLE) { "Descrição" }

                    input
                        name="description"
                        id="description"
                        type="text"
                        placeholder="Ex: Supermercado"
                        required
                        autofocus
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="amount" class=(FORM_LABEL_STYLE) { "Valor (R$)" }

                    input
                        name="amount"
                        id="amount"
                        type="number"
                        step="0.01"
                        min="0.01"
                        placeholder="0,00"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="date" class=(FORM_LABEL_STYLE) { "Data" }

                    input
                        name="date"
                        id="date"
                        type="date"
                        max=(today)
                        value=(today)
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="category" class=(FORM_LABEL_STYLE) { "Categoria" }

                    input
                        name="category"
                        id="category"
                        type="text"
                        list=(CATEGORY_SUGGESTIONS_ID)
                        placeholder="Digite ou escolha uma categoria"
                        autocomplete="off"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);

                    (category_suggestions_view(categories))
                }

                div class="md:col-span-2"
                {
                    label for="notes" class=(FORM_LABEL_STYLE) { "Observações" }

                    textarea
                        name="notes"
                        id="notes"
                        rows="2"
                        placeholder="Opcional"
                        class=(FORM_TEXT_INPUT_STYLE)
                    {}
                }

                button
                    type="submit"
                    name="type_"
                    value=(TransactionType::Income.as_str())
                    class=(BUTTON_INCOME_STYLE)
                {
                    span class="htmx-indicator" { (spinner) }
                    "💰 Adicionar Receita"
                }

                button
                    type="submit"
                    name="type_"
                    value=(TransactionType::Expense.as_str())
                    class=(BUTTON_EXPENSE_STYLE)
                {
                    span class="htmx-indicator" { (spinner) }
                    "💸 Adicionar Despesa"
                }
            }
        }
    }
}
