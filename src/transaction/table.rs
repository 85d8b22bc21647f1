//! The table listing every transaction, newest first.

use maud::{Markup, html};

use crate::{
    endpoints::{self, format_endpoint},
    html::{
        BADGE_STYLE, BUTTON_ICON_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        badge_color, format_currency, format_date,
    },
    tracker::LoadState,
    transaction::{Transaction, TransactionType, sort_newest_first},
};

/// The ID of the table body, the rows are replaced together with the dashboard.
pub const TRANSACTIONS_TABLE_ID: &str = "transacoes-tbody";

const CATEGORY_PLACEHOLDER: &str = "Sem categoria";
const DELETE_CONFIRMATION: &str = "Tem certeza que deseja deletar esta transação?";
const COLUMN_COUNT: u8 = 6;

/// The transaction data to display in a table row.
#[derive(Debug, PartialEq)]
struct TransactionTableRow<'a> {
    date: String,
    description: &'a str,
    category_name: &'a str,
    category_color: &'a str,
    type_: TransactionType,
    amount: String,
    delete_url: String,
}

impl<'a> TransactionTableRow<'a> {
    fn new(transaction: &'a Transaction) -> Self {
        Self {
            date: format_date(transaction.date),
            description: &transaction.description,
            category_name: transaction
                .category_name
                .as_deref()
                .unwrap_or(CATEGORY_PLACEHOLDER),
            category_color: badge_color(transaction.category_color.as_deref()),
            type_: transaction.type_,
            amount: format!(
                "{} {}",
                transaction.type_.sign(),
                format_currency(transaction.amount)
            ),
            delete_url: format_endpoint(endpoints::TRANSACTION, transaction.id),
        }
    }
}

/// Renders the transaction table.
///
/// While `load_state` is [LoadState::Loading] a loading row is shown, and on
/// [LoadState::Failed] an error row replaces the rows.
pub fn transactions_table_view(transactions: &[Transaction], load_state: LoadState) -> Markup {
    let rows = sort_newest_first(transactions)
        .into_iter()
        .map(TransactionTableRow::new)
        .collect::<Vec<_>>();

    html! {
        section class="w-full overflow-x-auto dark:bg-gray-800 rounded-lg shadow-md"
        {
            h2 class="text-xl font-bold px-6 py-4" { "📋 Transações" }

            table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Data" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Descrição" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Categoria" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Tipo" }
                        th scope="col" class="px-6 py-4 text-right" { "Valor" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Ações" }
                    }
                }

                tbody id=(TRANSACTIONS_TABLE_ID)
                {
                    @match load_state {
                        LoadState::Loading => (message_row("Carregando transações...", "text-gray-500")),
                        LoadState::Failed => (message_row("Erro ao carregar transações", "text-red-600")),
                        LoadState::Loaded if rows.is_empty() => {
                            (message_row("Nenhuma transação cadastrada", "text-gray-500"))
                        }
                        LoadState::Loaded => {
                            @for row in &rows {
                                (row_view(row))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn row_view(row: &TransactionTableRow<'_>) -> Markup {
    let amount_color = match row.type_ {
        TransactionType::Income => "text-green-600 dark:text-green-400",
        TransactionType::Expense => "text-red-600 dark:text-red-400",
    };
    let type_color = match row.type_ {
        TransactionType::Income => "#4CAF50",
        TransactionType::Expense => "#F44336",
    };

    html! {
        tr class=(TABLE_ROW_STYLE) data-type=(row.type_.as_str())
        {
            td class=(TABLE_CELL_STYLE) { (row.date) }

            td class="px-6 py-4 font-medium text-gray-900 dark:text-white" { (row.description) }

            td class=(TABLE_CELL_STYLE)
            {
                span
                    class={ "category-badge " (BADGE_STYLE) }
                    style=(format!("background-color: {}", row.category_color))
                {
                    (row.category_name)
                }
            }

            td class=(TABLE_CELL_STYLE)
            {
                span
                    class={ "type-badge " (BADGE_STYLE) }
                    style=(format!("background-color: {type_color}"))
                {
                    (row.type_.emoji()) " " (row.type_.as_str())
                }
            }

            td class={ "px-6 py-4 text-right font-semibold whitespace-nowrap " (amount_color) }
            {
                (row.amount)
            }

            td class=(TABLE_CELL_STYLE)
            {
                button
                    type="button"
                    title="Deletar"
                    class=(BUTTON_ICON_STYLE)
                    hx-delete=(row.delete_url)
                    hx-confirm=(DELETE_CONFIRMATION)
                    hx-target="#dashboard"
                    hx-swap="outerHTML"
                    hx-target-error="#alert-container"
                {
                    "🗑️"
                }
            }
        }
    }
}

fn message_row(message: &str, text_style: &str) -> Markup {
    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td colspan=(COLUMN_COUNT) class={ "px-6 py-8 text-center " (text_style) }
            {
                (message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{ElementRef, Html, Selector};
    use time::macros::date;

    use crate::{
        test_utils::{assert_hx_endpoint, assert_valid_html, transaction},
        tracker::LoadState,
        transaction::{Transaction, TransactionType},
    };

    use super::{DELETE_CONFIRMATION, transactions_table_view};

    fn render(transactions: &[Transaction], load_state: LoadState) -> Html {
        let html = Html::parse_fragment(
            &transactions_table_view(transactions, load_state).into_string(),
        );
        assert_valid_html(&html);
        html
    }

    fn rows(html: &Html) -> Vec<ElementRef<'_>> {
        html.select(&Selector::parse("tbody tr").unwrap()).collect()
    }

    fn cell_texts(row: &ElementRef<'_>) -> Vec<String> {
        row.select(&Selector::parse("td").unwrap())
            .map(|cell| cell.text().collect::<String>().trim().to_owned())
            .collect()
    }

    #[test]
    fn renders_rows_newest_first() {
        let transactions = vec![
            transaction(1, TransactionType::Expense, 42.1, date!(2025 - 10 - 01)),
            transaction(2, TransactionType::Income, 1234.56, date!(2025 - 10 - 28)),
        ];

        let html = render(&transactions, LoadState::Loaded);

        let rows = rows(&html);
        assert_eq!(rows.len(), 2);
        let first = cell_texts(&rows[0]);
        assert_eq!(first[0], "28/10/2025");
        assert_eq!(first[1], "Transação 2");
        assert_eq!(first[2], "Teste");
        assert_eq!(first[3], "💰 RECEITA");
        assert_eq!(first[4], "+ R$ 1.234,56");
        let second = cell_texts(&rows[1]);
        assert_eq!(second[0], "01/10/2025");
        assert_eq!(second[3], "💸 DESPESA");
        assert_eq!(second[4], "- R$ 42,10");
    }

    #[test]
    fn delete_button_asks_for_confirmation() {
        let transactions = vec![transaction(
            7,
            TransactionType::Expense,
            10.0,
            date!(2025 - 10 - 01),
        )];

        let html = render(&transactions, LoadState::Loaded);

        let button = html
            .select(&Selector::parse("button[title=Deletar]").unwrap())
            .next()
            .expect("delete button missing");
        assert_hx_endpoint(&button, "/api/transactions/7", "hx-delete");
        assert_eq!(button.value().attr("hx-confirm"), Some(DELETE_CONFIRMATION));
        assert_eq!(button.value().attr("hx-target"), Some("#dashboard"));
    }

    #[test]
    fn missing_category_shows_placeholder_and_default_color() {
        let mut uncategorized = transaction(1, TransactionType::Expense, 5.0, date!(2025 - 01 - 01));
        uncategorized.category_name = None;
        uncategorized.category_color = None;

        let html = render(&[uncategorized], LoadState::Loaded);

        let badge = html
            .select(&Selector::parse(".category-badge").unwrap())
            .next()
            .expect("category badge missing");
        assert_eq!(badge.text().collect::<String>(), "Sem categoria");
        assert_eq!(badge.value().attr("style"), Some("background-color: #999"));
    }

    #[test]
    fn description_is_escaped() {
        let mut sneaky = transaction(1, TransactionType::Expense, 5.0, date!(2025 - 01 - 01));
        sneaky.description = "<script>alert(1)</script>".to_owned();

        let html = render(&[sneaky], LoadState::Loaded);

        assert_eq!(html.select(&Selector::parse("script").unwrap()).count(), 0);
        assert_eq!(cell_texts(&rows(&html)[0])[1], "<script>alert(1)</script>");
    }

    #[test]
    fn empty_list_shows_single_message_row() {
        let html = render(&[], LoadState::Loaded);

        let rows = rows(&html);
        assert_eq!(rows.len(), 1);
        assert_eq!(cell_texts(&rows[0]), vec!["Nenhuma transação cadastrada"]);
    }

    #[test]
    fn failed_load_shows_error_row() {
        let transactions = vec![transaction(
            1,
            TransactionType::Income,
            10.0,
            date!(2025 - 01 - 01),
        )];

        let html = render(&transactions, LoadState::Failed);

        let rows = rows(&html);
        assert_eq!(rows.len(), 1);
        assert_eq!(cell_texts(&rows[0]), vec!["Erro ao carregar transações"]);
    }
}
