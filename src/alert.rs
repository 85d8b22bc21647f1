//! Success and error messages shown to the user.
//!
//! Alerts are swapped into the `#alert-container` element that every page
//! has at the bottom of the body. Errors get there through
//! `hx-target-error`, successes piggyback on a normal response as an
//! out-of-band swap.

use maud::{Markup, html};

/// The ID of the element that alerts are rendered into.
pub const ALERT_CONTAINER_ID: &str = "alert-container";

/// A message for the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// Something the user asked for worked.
    Success {
        /// The headline.
        message: String,
        /// Extra text under the headline, may be empty.
        details: String,
    },
    /// Something the user asked for failed.
    Error {
        /// The headline.
        message: String,
        /// Extra text under the headline, may be empty.
        details: String,
    },
}

impl Alert {
    /// Render the alert as a dismissable modal.
    pub fn into_html(self) -> Markup {
        let (message, details, icon, accent) = match self {
            Alert::Success { message, details } => (message, details, "✅", "border-green-500"),
            Alert::Error { message, details } => (message, details, "⚠️", "border-red-500"),
        };

        html! {
            div
                role="alert"
                class={ "alert flex items-start gap-3 p-4 mb-4 rounded-lg shadow-lg \
                    bg-white dark:bg-gray-800 text-gray-900 dark:text-white border-l-4 " (accent) }
            {
                span class="text-xl" { (icon) }

                div class="flex-1"
                {
                    p class="font-medium" { (message) }

                    @if !details.is_empty() {
                        p class="mt-1 text-sm text-gray-600 dark:text-gray-300" { (details) }
                    }
                }

                button
                    type="button"
                    aria-label="Fechar"
                    class="text-gray-500 hover:text-gray-900 dark:hover:text-white"
                    onclick="this.closest('.alert').remove()"
                {
                    "✕"
                }
            }
        }
    }

    /// Render the alert so that htmx swaps it into the alert container
    /// alongside the main response.
    pub fn into_oob_html(self) -> Markup {
        html! {
            div
                id=(ALERT_CONTAINER_ID)
                hx-swap-oob="true"
                class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                (self.into_html())
            }
        }
    }
}
