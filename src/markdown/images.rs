//! Rewriting of escaped `<img>` tags in rendered markdown.

const IMG_OPEN: &str = "&lt;img";
const TAG_CLOSE: &str = "&gt;";
const QUOTE: &str = "&quot;";

/// Rebuilds escaped image tags as minimal `<img>` elements.
///
/// Scans rendered HTML for `&lt;img ... &gt;` runs on a single line. Each
/// match with a non-empty `src=&quot;...&quot;` attribute becomes
/// `<img src="...">`, plus `width="..."` when the match carries a non-empty
/// width. All other attributes are dropped. Matches without a usable `src`
/// are copied unchanged.
///
/// # Arguments
///
/// * `html`: HTML produced by the markdown renderer
///
/// # Returns
///
/// HTML with escaped image tags rewritten
pub fn rewrite_escaped_images(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut pos = 0;

    while let Some(offset) = html[pos..].find(IMG_OPEN) {
        let tag_start = pos + offset;
        let search_from = tag_start + IMG_OPEN.len();

        // Tag must close before the end of the line
        let tag_end = match html[search_from..].find(TAG_CLOSE) {
            Some(p) if !html[search_from..search_from + p].contains('\n') => {
                search_from + p + TAG_CLOSE.len()
            }
            _ => {
                result.push_str(&html[pos..search_from]);
                pos = search_from;
                continue;
            }
        };

        result.push_str(&html[pos..tag_start]);

        let tag = &html[tag_start..tag_end];
        match rebuild_image(tag) {
            Some(rebuilt) => result.push_str(&rebuilt),
            None => result.push_str(tag),
        }

        pos = tag_end;
    }

    result.push_str(&html[pos..]);
    result
}

/// Builds a clean image tag from one escaped match, or `None` without `src`.
fn rebuild_image(tag: &str) -> Option<String> {
    let src = quoted_attribute(tag, "src")?;

    match quoted_attribute(tag, "width") {
        Some(width) => Some(format!(r#"<img src="{}" width="{}">"#, src, width)),
        None => Some(format!(r#"<img src="{}">"#, src)),
    }
}

/// Extracts the first non-empty `name=&quot;value&quot;` value in `tag`.
fn quoted_attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("{}={}", name, QUOTE);
    let value_start = tag.find(&needle)? + needle.len();
    let value_len = tag[value_start..].find(QUOTE)?;
    let value = &tag[value_start..value_start + value_len];

    if value.is_empty() { None } else { Some(value) }
}
