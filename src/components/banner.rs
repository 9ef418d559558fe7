//! Dashboard banner component

use maud::{Markup, html};

/// Upstream issue tracker for the dashboard.
pub const TRACKER_URL: &str = "https://github.com/mozilla/platform-tilt/";

/// Renders the banner with logo, heading and project description
pub fn banner() -> Markup {
    html! {
        div class="jumbotron" {
            div style="position: absolute; top: 0;" {
                img src="./static/Mozilla.svg" style="height: 32px" alt="Mozilla";
                " "
            }
            h1 { "Platform Tilt" }
            p {
                "This dashboard tracks technical issues in major software platforms which \
                 disadvantage Firefox relative to the first-party browser. We consider \
                 aspects like security, stability, performance, and functionality, and \
                 propose changes to create a more level playing field."
            }
            p {
                "Further discussion on the live issues can be found in our "
                a href=(TRACKER_URL) { "platform-tilt issue tracker" }
                "."
            }
        }
    }
}
