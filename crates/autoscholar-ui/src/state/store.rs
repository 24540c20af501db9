//! Single-slot store for the most recent search results.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Article;

/// Identifies one replacement of the store's contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    /// Raw counter value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
struct Snapshot {
    generation: Generation,
    records: Arc<Vec<Article>>,
}

/// Holds the article list from the last successful search.
///
/// The list is replaced wholesale; there is no partial mutation. Indices
/// handed out in rendered markup stay meaningful only until the next
/// [`ResultStore::replace`].
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    inner: Arc<RwLock<Snapshot>>,
}

impl ResultStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a new list and return its generation.
    pub async fn replace(&self, records: Vec<Article>) -> Generation {
        let mut snapshot = self.inner.write().await;
        snapshot.generation = Generation(snapshot.generation.0 + 1);
        snapshot.records = Arc::new(records);

        tracing::debug!(
            generation = snapshot.generation.0,
            records = snapshot.records.len(),
            "Result store replaced"
        );
        snapshot.generation
    }

    /// Record at `index` in the current list.
    pub async fn get(&self, index: usize) -> Option<Article> {
        self.inner.read().await.records.get(index).cloned()
    }

    /// Record at `index`, only if the store still holds `generation`.
    pub async fn resolve(&self, generation: Generation, index: usize) -> Option<Article> {
        let snapshot = self.inner.read().await;
        if snapshot.generation != generation {
            return None;
        }
        snapshot.records.get(index).cloned()
    }

    /// Generation of the current list.
    pub async fn generation(&self) -> Generation {
        self.inner.read().await.generation
    }

    /// Number of held records.
    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    /// Returns true if no records are held.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> Article {
        Article { title: Some(title.to_string()), ..Default::default() }
    }

    #[tokio::test]
    async fn test_get_out_of_range_is_none() {
        let store = ResultStore::new();
        store.replace(vec![article("a"), article("b")]).await;

        assert_eq!(store.get(1).await.unwrap().title.as_deref(), Some("b"));
        assert!(store.get(2).await.is_none());
    }

    #[tokio::test]
    async fn test_replace_bumps_generation() {
        let store = ResultStore::new();
        let first = store.replace(vec![article("a")]).await;
        let second = store.replace(vec![article("b")]).await;

        assert!(second > first);
        assert_eq!(store.generation().await, second);
    }

    #[tokio::test]
    async fn test_resolve_rejects_stale_generation() {
        let store = ResultStore::new();
        let stale = store.replace(vec![article("a"), article("b")]).await;
        let fresh = store.replace(vec![article("c"), article("d"), article("e")]).await;

        assert!(store.resolve(stale, 0).await.is_none());
        assert_eq!(store.resolve(fresh, 0).await.unwrap().title.as_deref(), Some("c"));
    }

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = ResultStore::new();
        assert!(store.is_empty().await);
        assert_eq!(store.generation().await.get(), 0);
    }
}
