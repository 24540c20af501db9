//! Article records in their search-result and stored shapes.

use serde::{Deserialize, Deserializer, Serialize};

/// A publication as returned by the author search proxy.
///
/// This is also the body of a save request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Article title.
    #[serde(default)]
    pub title: Option<String>,

    /// Author list as a single display string.
    #[serde(default)]
    pub authors: Option<String>,

    /// Venue and volume information.
    #[serde(default)]
    pub publication: Option<String>,

    /// Link to the article.
    #[serde(default)]
    pub link: Option<String>,

    /// Publication year. Numeric years are accepted and kept as text.
    #[serde(default, deserialize_with = "lenient_string")]
    pub year: Option<String>,

    /// Citation counter. The search API spells this `cited_by`.
    #[serde(default, alias = "cited_by")]
    pub cited_by: Option<CitedBy>,
}

impl Article {
    /// Citation count, or 0 when the holder or its value is missing.
    #[must_use]
    pub fn citations(&self) -> i64 {
        self.cited_by.as_ref().and_then(|c| c.value).unwrap_or(0)
    }

    /// Link if present and non-empty.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref().filter(|l| !l.is_empty())
    }
}

/// Nested citation value holder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitedBy {
    /// Number of citing works.
    #[serde(default)]
    pub value: Option<i64>,
}

impl CitedBy {
    /// Create a holder with a known count.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self { value: Some(value) }
    }
}

/// A publication as held by the persistence layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredArticle {
    /// Identifier assigned on save.
    #[serde(default)]
    pub id: Option<i64>,

    /// Article title.
    #[serde(default)]
    pub title: Option<String>,

    /// Author list as a single display string.
    #[serde(default)]
    pub authors: Option<String>,

    /// Link to the article.
    #[serde(default)]
    pub link: Option<String>,

    /// Publication name and year combined by the backend.
    #[serde(default)]
    pub publication_date: Option<String>,

    /// Citation count at save time.
    #[serde(default)]
    pub cited_by: Option<i64>,
}

impl StoredArticle {
    /// Citation count, or 0 when absent.
    #[must_use]
    pub fn citations(&self) -> i64 {
        self.cited_by.unwrap_or(0)
    }

    /// Link if present and non-empty.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref().filter(|l| !l.is_empty())
    }
}

/// Accept a string, a number, or null.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
