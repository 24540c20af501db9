//! Search results table with per-row save controls.

use super::{escape, link_cell, text_or_na};
use crate::config::labels;
use crate::models::{Article, AuthorInfo};

const COLUMNS: &[&str] =
    &["Save in Database", "Title", "Authors", "Publication", "Link", "Year", "Cited By"];

/// Render an author's articles as a table.
///
/// Each row carries a save control whose `data-index` is the article's
/// position in `info.articles()`.
#[must_use]
pub fn author_table(info: &AuthorInfo) -> String {
    let articles = info.articles();

    let mut html = format!("<h1>{} Articles</h1>\n", text_or_na(info.display_name()));
    html.push_str(&format!(
        "<p><strong>Affiliations:</strong> {}</p>\n",
        text_or_na(info.display_affiliations())
    ));
    html.push_str("<h2>Articles</h2>\n");
    html.push_str("<div class=\"table-responsive\">\n<table>\n<thead>\n<tr>");
    for column in COLUMNS {
        html.push_str(&format!("<th>{column}</th>"));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    if articles.is_empty() {
        html.push_str(&format!(
            "<tr><td colspan=\"{}\">No articles found for this author.</td></tr>\n",
            COLUMNS.len()
        ));
    } else {
        for (index, article) in articles.iter().enumerate() {
            html.push_str(&article_row(index, article));
        }
    }

    html.push_str("</tbody>\n</table>\n</div>\n");
    html
}

fn article_row(index: usize, article: &Article) -> String {
    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        save_button(index),
        text_or_na(article.title.as_deref()),
        text_or_na(article.authors.as_deref()),
        text_or_na(article.publication.as_deref()),
        link_cell(article.link()),
        text_or_na(article.year.as_deref()),
        article.citations(),
    )
}

fn save_button(index: usize) -> String {
    format!(
        r#"<button type="button" class="{}" data-index="{index}">{}</button>"#,
        labels::SAVE_BUTTON_CLASS,
        escape(labels::CALL_TO_ACTION)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CitedBy;

    fn info(articles: Vec<Article>) -> AuthorInfo {
        AuthorInfo {
            name: Some("Ada Lovelace".into()),
            affiliations: None,
            articles: Some(articles),
            author: None,
        }
    }

    #[test]
    fn test_empty_list_renders_fallback_row() {
        let html = author_table(&info(vec![]));
        assert!(html.contains(r#"<td colspan="7">No articles found for this author.</td>"#));
        assert!(!html.contains("save-button"));
    }

    #[test]
    fn test_absent_list_renders_fallback_row() {
        let html = author_table(&AuthorInfo::default());
        assert!(html.contains("No articles found for this author."));
        assert!(html.contains("<h1>N/A Articles</h1>"));
    }

    #[test]
    fn test_missing_affiliations_is_na() {
        let html = author_table(&info(vec![]));
        assert!(html.contains("<p><strong>Affiliations:</strong> N/A</p>"));
    }

    #[test]
    fn test_rows_carry_indices() {
        let html = author_table(&info(vec![
            Article { title: Some("One".into()), ..Default::default() },
            Article { title: Some("Two".into()), cited_by: Some(CitedBy::new(9)), ..Default::default() },
        ]));

        assert!(html.contains(r#"data-index="0">Add</button>"#));
        assert!(html.contains(r#"data-index="1">Add</button>"#));
        assert!(html.contains("<td>9</td>"));
    }

    #[test]
    fn test_missing_fields_render_na_and_zero() {
        let html = author_table(&info(vec![Article::default()]));
        let row = html.lines().find(|l| l.contains("save-button")).unwrap();
        assert_eq!(row.matches("<td>N/A</td>").count(), 5);
        assert!(row.ends_with("<td>0</td></tr>"));
    }
}
