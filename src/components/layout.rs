//! Page layout wrapper component

use maud::{Markup, html};

use super::banner::banner;
use super::script::interaction_script;

/// Document title.
pub const PAGE_TITLE: &str = "Platform Tilt - Mozilla";

/// Search engine description of the dashboard.
pub const PAGE_DESCRIPTION: &str = "Platform Tilt tracks technical issues in major software \
    platforms which disadvantage Firefox relative to the first-party browser.";

/// Stylesheet path, relative to the generated page.
pub const STYLESHEET: &str = "static/page.css";

/// Wraps dashboard content with the fixed document shell
///
/// Provides the html, head and body structure: charset, title, description,
/// stylesheet, banner, content column and the interaction script. The caller
/// provides the vendor tables. The doctype is added at serialization time.
///
/// # Arguments
///
/// * `content`: Markup placed in the main content column
///
/// # Returns
///
/// Complete HTML element tree without doctype
pub fn page_wrapper(content: Markup) -> Markup {
    html! {
        html {
            head {
                meta charset="UTF-8";
                title { (PAGE_TITLE) }
                meta name="description" content=(PAGE_DESCRIPTION);
                link rel="stylesheet" href=(STYLESHEET);
            }
            body {
                div class="container" {
                    (banner())
                    div class="col-sm-12" {
                        (content)
                    }
                    div class="clearfix" {}
                }
                (interaction_script())
            }
        }
    }
}
