//! Shared test helpers: an in-process backend with scripted replies.
#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use autoscholar_ui::error::{ClientError, ClientResult};
use autoscholar_ui::models::{Article, AuthorInfo, CitedBy, StoredArticle};
use autoscholar_ui::Backend;

/// Scripted reply to a save request.
#[derive(Debug, Clone, Copy)]
pub enum Reply {
    /// 2xx with this id.
    Saved(i64),
    /// Non-2xx with this status and message.
    Rejected(u16, &'static str),
}

/// Backend whose save replies are scripted per article title.
#[derive(Default)]
pub struct StubBackend {
    author: AuthorInfo,
    replies: Mutex<HashMap<String, VecDeque<(Duration, Reply)>>>,
    save_calls: AtomicUsize,
}

impl StubBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Author returned by every search.
    pub fn with_author(mut self, author: AuthorInfo) -> Self {
        self.author = author;
        self
    }

    /// Queue a reply for saves of `title`, delivered after `delay`.
    pub fn reply(self, title: &str, delay: Duration, reply: Reply) -> Self {
        self.replies
            .lock()
            .unwrap()
            .entry(title.to_string())
            .or_default()
            .push_back((delay, reply));
        self
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Backend for StubBackend {
    async fn fetch_author(&self, _author_id: &str) -> ClientResult<AuthorInfo> {
        Ok(self.author.clone())
    }

    async fn save_article(&self, article: &Article) -> ClientResult<StoredArticle> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);

        let title = article.title.clone().unwrap_or_default();
        let scripted = self.replies.lock().unwrap().get_mut(&title).and_then(VecDeque::pop_front);
        let (delay, reply) = scripted.unwrap_or((Duration::ZERO, Reply::Saved(1)));

        tokio::time::sleep(delay).await;

        match reply {
            Reply::Saved(id) => Ok(StoredArticle {
                id: Some(id),
                title: article.title.clone(),
                ..Default::default()
            }),
            Reply::Rejected(status, message) => Err(ClientError::api(status, message)),
        }
    }

    async fn list_articles(&self) -> ClientResult<Vec<StoredArticle>> {
        Ok(vec![])
    }
}

pub fn article(title: &str) -> Article {
    Article {
        title: Some(title.to_string()),
        authors: Some("A Author, B Author".to_string()),
        publication: Some("Journal of Tests 1 (2)".to_string()),
        link: Some(format!("https://scholar.example.org/{}", title.replace(' ', "-"))),
        year: Some("2020".to_string()),
        cited_by: Some(CitedBy::new(12)),
    }
}

pub fn author(articles: Vec<Article>) -> AuthorInfo {
    AuthorInfo {
        name: Some("Ada Lovelace".to_string()),
        affiliations: Some("Analytical Society".to_string()),
        articles: Some(articles),
        author: None,
    }
}
