//! The part of the page that changes when transactions change.
//!
//! The dashboard holds the add-transaction form, the totals and the
//! transaction table. It is rendered as a whole on page load and swapped in
//! as a whole after every add or delete.

use maud::{Markup, html};
use time::Date;

use crate::{
    alert::Alert,
    summary::{Summary, summary_view},
    tracker::TrackerSnapshot,
    transaction::{transaction_form_view, transactions_table_view},
};

/// The ID of the element that htmx replaces after a change.
pub const DASHBOARD_ID: &str = "dashboard";

/// Renders the form, totals and table for `snapshot`.
///
/// `today` is the default and latest date for the form.
pub fn dashboard_view(snapshot: &TrackerSnapshot, today: Date) -> Markup {
    let summary = Summary::from_transactions(&snapshot.transactions);

    html! {
        div id=(DASHBOARD_ID) class="w-full max-w-5xl space-y-6"
        {
            (transaction_form_view(&snapshot.categories, today))
            (summary_view(&summary))
            (transactions_table_view(&snapshot.transactions, snapshot.transactions_state))
        }
    }
}

/// The dashboard followed by `alert` as an out-of-band swap.
pub fn dashboard_with_alert(snapshot: &TrackerSnapshot, today: Date, alert: Alert) -> Markup {
    html! {
        (dashboard_view(snapshot, today))
        (alert.into_oob_html())
    }
}
