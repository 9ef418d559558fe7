//! Integration tests for dashboard assembly and formatting.

use platform_tilt::{IssueRecord, IssueState, VendorIssueSet, assemble_page, render_document};

fn example_set() -> VendorIssueSet {
    VendorIssueSet {
        label: "vendor: apple".to_string(),
        vendor: "apple".to_string(),
        issues: vec![IssueRecord {
            number: 42,
            url: "http://x/42".to_string(),
            title: "Example".to_string(),
            state: IssueState::Open,
            body: "<p>hi</p>".to_string(),
            labels: vec!["vendor: apple".to_string()],
            comments_url: "http://x/42/comments".to_string(),
        }],
    }
}

/// Tests the single issue row of the example vendor set.
#[test]
fn test_single_issue_row() {
    // Arrange
    let sets = vec![example_set()];

    // Act
    let html = assemble_page(&sets).into_string();

    // Assert
    assert!(html.contains(r#"<details id="issue_42">"#));
    assert!(html.contains(r#"<a href="http://x/42">Example</a>"#));
    assert!(html.contains(
        r##"<a class="internal-link" href="#issue_42" title="Permalink to this issue">#</a>"##
    ));
    assert!(html.contains(r#"<td class="state">open</td>"#));
    assert_eq!(html.matches("<tr>").count(), 2, "Header row and one body row");
}

/// Tests the formatted page layout of an issue row.
#[test]
fn test_formatted_issue_row() {
    // Arrange
    let sets = vec![example_set()];

    // Act
    let html = render_document(assemble_page(&sets));

    // Assert
    let expected_row = r##"            <tr>
              <td class="title">
                <details id="issue_42">
                  <summary><a href="http://x/42">Example</a><a class="internal-link" href="#issue_42" title="Permalink to this issue">#</a></summary>
                  <div class="issue-body">
                    <p>hi</p>
                  </div>
                </details>
              </td>
              <td class="state">open</td>
            </tr>
"##;
    assert!(
        html.contains(expected_row),
        "Formatted row not found in:\n{}",
        html
    );
}

/// Tests formatted output keeps the document shell intact.
#[test]
fn test_formatted_document_shell() {
    // Arrange
    let sets = vec![example_set()];

    // Act
    let html = render_document(assemble_page(&sets));

    // Assert
    assert!(html.starts_with("<!DOCTYPE html>\n<html>\n  <head>\n"));
    assert!(html.contains("    <title>Platform Tilt - Mozilla</title>\n"));
    assert!(html.contains("      <div class=\"clearfix\"></div>\n"));
    assert!(html.contains("    <script>\n      function expandAll(table) {\n"));
    assert!(html.ends_with("</html>\n"));
}
