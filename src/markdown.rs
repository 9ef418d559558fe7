//! Markdown rendering for issue bodies.
//!
//! This module renders issue markdown with comrak and rewrites the image
//! tags that comrak escapes into minimal `<img>` elements.

mod images;
mod renderer;

pub use images::rewrite_escaped_images;
pub use renderer::MarkdownRenderer;
