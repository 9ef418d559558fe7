//! Client-side interaction script

use maud::{Markup, PreEscaped, html};

/// Expands all disclosure rows of a table and opens the row named by the
/// URL fragment, on load and on every fragment change.
const INTERACTION_JS: &str = r#"
function expandAll(table) {
  [...table.querySelectorAll("details")].forEach((details) => details.open = true);
}
function openTarget() {
  let hash = location.hash.substring(1);
  let element;
  if (hash) element = document.getElementById(hash);
  if (!element) {
    return;
  }
  if (element.tagName.toLowerCase() === 'details') element.open = true;
}
window.addEventListener('hashchange', openTarget);
openTarget();
"#;

/// Renders the inline interaction script element
pub fn interaction_script() -> Markup {
    html! {
        script { (PreEscaped(INTERACTION_JS)) }
    }
}
