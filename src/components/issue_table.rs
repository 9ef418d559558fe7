//! Vendor issue table component

use maud::{Markup, PreEscaped, html};

use crate::issues::{IssueRecord, VendorIssueSet};

/// Renders one vendor's issues as a table of expandable rows
///
/// The table id is `issues_{vendor}`. Each row holds a `details` element with
/// id `issue_{number}` whose summary links to the tracker and to its own
/// permalink, and whose body is the pre-rendered issue HTML.
///
/// # Arguments
///
/// * `set`: Vendor issues in display order
///
/// # Returns
///
/// Table markup for the vendor
pub fn issue_table(set: &VendorIssueSet) -> Markup {
    let table_id = set.table_id();
    let expand_all = format!(r#"expandAll(document.getElementById("{}"))"#, table_id);

    html! {
        table id=(table_id) {
            caption {
                "Vendor: "
                b style="text-transform: capitalize;" { (capitalize(&set.vendor)) }
                button onclick=(expand_all) { "Expand all" }
            }
            thead {
                tr {
                    th { "Issue" }
                    th class="state" { "Status" }
                }
            }
            tbody {
                @for issue in &set.issues {
                    (issue_row(issue))
                }
            }
        }
    }
}

fn issue_row(issue: &IssueRecord) -> Markup {
    let anchor = issue.anchor_id();

    html! {
        tr {
            td class="title" {
                details id=(anchor) {
                    summary {
                        a href=(issue.url) { (issue.title) }
                        a class="internal-link" href=(format!("#{}", anchor)) title="Permalink to this issue" {
                            "#"
                        }
                    }
                    div class="issue-body" {
                        (PreEscaped(&issue.body))
                    }
                }
            }
            td class="state" { (issue.state.as_str()) }
        }
    }
}

/// Uppercases the first character of a vendor key for display.
fn capitalize(vendor: &str) -> String {
    let mut chars = vendor.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
