use maud::{Markup, html};

use crate::category::Category;

/// The id of the datalist that the category input uses for suggestions.
pub const CATEGORY_SUGGESTIONS_ID: &str = "categorias-list";

/// Renders the known categories as a datalist for the category name input.
///
/// Each option is labelled with the emoji for its type.
pub fn category_suggestions_view(categories: &[Category]) -> Markup {
    html! {
        datalist id=(CATEGORY_SUGGESTIONS_ID)
        {
            @for category in categories {
                option value=(category.name)
                {
                    (category.type_.emoji()) " " (category.name)
                }
            }
        }
    }
}
