//! Author metadata returned by the search proxy.

use serde::{Deserialize, Serialize};

use super::Article;

/// Author search payload: profile fields plus the article list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorInfo {
    /// Author name.
    #[serde(default)]
    pub name: Option<String>,

    /// Affiliations as a single display string.
    #[serde(default)]
    pub affiliations: Option<String>,

    /// Articles by this author.
    #[serde(default)]
    pub articles: Option<Vec<Article>>,

    /// Nested profile, as sent by the upstream search API.
    #[serde(default)]
    pub author: Option<AuthorProfile>,
}

/// Nested author profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorProfile {
    /// Author name.
    #[serde(default)]
    pub name: Option<String>,

    /// Affiliations as a single display string.
    #[serde(default)]
    pub affiliations: Option<String>,
}

impl AuthorInfo {
    /// Author name, preferring the top-level field.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .or_else(|| self.author.as_ref()?.name.as_deref())
            .filter(|n| !n.is_empty())
    }

    /// Affiliations, preferring the top-level field.
    #[must_use]
    pub fn display_affiliations(&self) -> Option<&str> {
        self.affiliations
            .as_deref()
            .or_else(|| self.author.as_ref()?.affiliations.as_deref())
            .filter(|a| !a.is_empty())
    }

    /// Articles, empty when absent.
    #[must_use]
    pub fn articles(&self) -> &[Article] {
        self.articles.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_top_level_fields() {
        let info: AuthorInfo = serde_json::from_value(json!({
            "name": "Ada Lovelace",
            "affiliations": "Analytical Society",
            "articles": [{"title": "Notes"}]
        }))
        .unwrap();

        assert_eq!(info.display_name(), Some("Ada Lovelace"));
        assert_eq!(info.display_affiliations(), Some("Analytical Society"));
        assert_eq!(info.articles().len(), 1);
    }

    #[test]
    fn test_nested_author_fallback() {
        let info: AuthorInfo = serde_json::from_value(json!({
            "author": {"name": "Grace Hopper", "affiliations": "Yale"},
            "articles": []
        }))
        .unwrap();

        assert_eq!(info.display_name(), Some("Grace Hopper"));
        assert_eq!(info.display_affiliations(), Some("Yale"));
    }

    #[test]
    fn test_null_articles_is_empty() {
        let info: AuthorInfo =
            serde_json::from_value(json!({"name": "X", "articles": null})).unwrap();
        assert!(info.articles().is_empty());
        assert!(info.display_affiliations().is_none());
    }
}
