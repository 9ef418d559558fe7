//! Dashboard page assembly.

use maud::{Markup, html};

use crate::components::issue_table::issue_table;
use crate::components::layout::page_wrapper;
use crate::issues::VendorIssueSet;

/// Assembles the dashboard document from vendor issue sets.
///
/// Emits the fixed shell followed by one issue table per set, in the order
/// given. Performs no I/O. Issue bodies are injected as trusted HTML.
///
/// # Arguments
///
/// * `sets`: Vendor issue sets in display order
///
/// # Returns
///
/// Document markup without doctype, ready for serialization
pub fn assemble_page(sets: &[VendorIssueSet]) -> Markup {
    page_wrapper(html! {
        @for set in sets {
            (issue_table(set))
        }
    })
}
