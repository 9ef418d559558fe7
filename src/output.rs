//! Dashboard serialization and output.

use anyhow::{Context, Result};
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::format::pretty_print;

/// Serializes a document tree with a leading doctype.
pub(crate) fn serialize(document: Markup) -> String {
    html! {
        (DOCTYPE)
        (document)
    }
    .into_string()
}

/// Serializes and pretty prints a document tree.
pub fn render_document(document: Markup) -> String {
    pretty_print(&serialize(document))
}

/// Writes the formatted document to `path`, replacing any existing file.
///
/// Creates missing parent directories.
///
/// # Arguments
///
/// * `document`: Assembled page markup without doctype
/// * `path`: Output file path
///
/// # Errors
///
/// Returns error if the parent directory cannot be created or the file
/// cannot be written.
pub fn write_output(document: Markup, path: &Path) -> Result<()> {
    let html = render_document(document);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    fs::write(path, &html).with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), bytes = html.len(), "Wrote dashboard");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_serialize_prepends_doctype() {
        // Arrange
        let document = html! { html { body { p { "hi" } } } };

        // Act
        let result = serialize(document);

        // Assert
        assert_eq!(result, "<!DOCTYPE html><html><body><p>hi</p></body></html>");
    }

    #[test]
    fn test_render_document_formats() {
        // Arrange
        let document = html! { html { body { p { "hi" } } } };

        // Act
        let result = render_document(document);

        // Assert
        assert_eq!(
            result,
            "<!DOCTYPE html>\n<html>\n  <body>\n    <p>hi</p>\n  </body>\n</html>\n"
        );
    }

    #[test]
    fn test_write_output_overwrites() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let path = dir.path().join("index.html");
        fs::write(&path, "stale")?;

        // Act
        write_output(html! { p { "fresh" } }, &path)?;

        // Assert
        let content = fs::read_to_string(&path)?;
        assert!(content.starts_with("<!DOCTYPE html>\n"));
        assert!(content.contains("<p>fresh</p>"));
        assert!(!content.contains("stale"));
        Ok(())
    }

    #[test]
    fn test_write_output_creates_parent_dirs() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let path = dir.path().join("site").join("nested").join("index.html");

        // Act
        write_output(html! { p { "x" } }, &path)?;

        // Assert
        assert!(path.exists());
        Ok(())
    }
}
