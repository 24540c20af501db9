//! HTML fragment rendering.
//!
//! Every function here is pure: the same input always yields the same markup.

mod author_table;
mod library_table;

pub use author_table::author_table;
pub use library_table::library_table;

/// Fallback text for missing values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Inline error paragraph.
#[must_use]
pub fn error_message(text: &str) -> String {
    format!(r#"<p class="error-message">{}</p>"#, escape(text))
}

/// Inline loading paragraph.
#[must_use]
pub fn loading_message(text: &str) -> String {
    format!(r#"<p class="loading-message">{}</p>"#, escape(text))
}

/// Wrap a fragment in a minimal standalone document.
#[must_use]
pub fn document(title: &str, fragment: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{}</title>
</head>
<body>
<div id="api-content">
{}
</div>
</body>
</html>
"#,
        escape(title),
        fragment
    )
}

/// Escape text for use in element content and quoted attributes.
#[must_use]
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escaped value, or "N/A" when missing or empty.
fn text_or_na(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => escape(v),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Link cell content: an anchor when a link exists, plain "N/A" otherwise.
fn link_cell(link: Option<&str>) -> String {
    match link {
        Some(href) => {
            let href = escape(href);
            format!(r#"<a href="{href}" target="_blank">{href}</a>"#)
        }
        None => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn test_text_or_na() {
        assert_eq!(text_or_na(None), "N/A");
        assert_eq!(text_or_na(Some("")), "N/A");
        assert_eq!(text_or_na(Some("A & B")), "A &amp; B");
    }

    #[test]
    fn test_link_cell_without_link_has_no_anchor() {
        assert_eq!(link_cell(None), "N/A");
        assert!(link_cell(Some("https://x.org")).starts_with(r#"<a href="https://x.org""#));
    }

    #[test]
    fn test_document_wraps_fragment() {
        let page = document("Results", "<p>hi</p>");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Results</title>"));
        assert!(page.contains("<p>hi</p>"));
    }
}
