//! Stored articles table.

use super::{link_cell, text_or_na};
use crate::models::StoredArticle;

const COLUMNS: &[&str] =
    &["ID", "Title", "Authors", "Publication Info (Date)", "Cited By", "Link"];

/// Render the persisted articles. No save controls are emitted.
#[must_use]
pub fn library_table(articles: &[StoredArticle]) -> String {
    let mut html = String::from("<h1>Saved Database Articles</h1>\n");
    html.push_str(&format!(
        "<p>Showing {} articles currently saved in the database.</p>\n",
        articles.len()
    ));
    html.push_str("<div class=\"table-responsive\">\n<table>\n<thead>\n<tr>");
    for column in COLUMNS {
        html.push_str(&format!("<th>{column}</th>"));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    if articles.is_empty() {
        html.push_str(&format!(
            "<tr><td colspan=\"{}\">The database currently contains no saved articles.</td></tr>\n",
            COLUMNS.len()
        ));
    }

    for article in articles {
        let id = article.id.map_or_else(|| super::NOT_AVAILABLE.to_string(), |id| id.to_string());
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            id,
            text_or_na(article.title.as_deref()),
            text_or_na(article.authors.as_deref()),
            text_or_na(article.publication_date.as_deref()),
            article.citations(),
            link_cell(article.link()),
        ));
    }

    html.push_str("</tbody>\n</table>\n</div>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_counts_records() {
        let html = library_table(&[StoredArticle::default(), StoredArticle::default()]);
        assert!(html.contains("Showing 2 articles currently saved in the database."));
    }

    #[test]
    fn test_empty_library() {
        let html = library_table(&[]);
        assert!(html.contains("Showing 0 articles"));
        assert!(html.contains(
            r#"<td colspan="6">The database currently contains no saved articles.</td>"#
        ));
    }

    #[test]
    fn test_row_shows_identifier_and_raw_count() {
        let html = library_table(&[StoredArticle {
            id: Some(42),
            title: Some("Saved".into()),
            cited_by: Some(0),
            link: Some("https://doi.org/x".into()),
            ..Default::default()
        }]);

        assert!(html.contains("<tr><td>42</td><td>Saved</td><td>N/A</td><td>N/A</td><td>0</td>"));
        assert!(html.contains(r#"<a href="https://doi.org/x" target="_blank">"#));
        assert!(!html.contains("save-button"));
    }

    #[test]
    fn test_missing_link_has_no_anchor() {
        let html = library_table(&[StoredArticle { id: Some(1), ..Default::default() }]);
        assert!(!html.contains("<a "));
        assert!(html.contains("<td>N/A</td></tr>"));
    }
}
