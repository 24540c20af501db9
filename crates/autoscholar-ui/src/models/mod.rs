//! Data models for the backend REST contract.
//!
//! All models use `#[serde(default)]` so missing fields read as empty
//! rather than failing the whole response.

mod article;
mod author;

pub use article::{Article, CitedBy, StoredArticle};
pub use author::{AuthorInfo, AuthorProfile};
