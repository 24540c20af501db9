//! Event handlers for the search form, the library button, and clicks
//! inside the display region.
//!
//! All handlers share one [`ViewContext`]: the backend, the result store,
//! and the elements they read and write.

mod library;
mod search;

pub use library::LibraryViewController;
pub use search::SearchController;

use std::sync::Arc;
use std::time::Duration;

use crate::client::{Backend, BackendClient};
use crate::config::{Config, labels};
use crate::error::{ViewError, ViewResult};
use crate::state::{Control, DisplayRegion, ResultStore, TextInput};
use crate::workflow::{SaveOutcome, SaveWorkflow};

/// What a click inside the display region led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Target is not an enabled save control.
    Ignored,
    /// A save request ran for the target.
    Save(SaveOutcome),
}

/// Shared state for all controllers.
#[derive(Clone)]
pub struct ViewContext {
    /// Backend client.
    pub backend: Arc<dyn Backend>,

    /// Results of the last successful search.
    pub store: ResultStore,

    /// Region whose content the controllers replace.
    pub display: DisplayRegion,

    /// Author identifier field.
    pub author_input: TextInput,

    save: SaveWorkflow,
}

impl ViewContext {
    /// Create a context with fresh, empty view state.
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>, reset_delay: Duration) -> Self {
        Self {
            save: SaveWorkflow::new(Arc::clone(&backend), reset_delay),
            backend,
            store: ResultStore::new(),
            display: DisplayRegion::new(),
            author_input: TextInput::new(),
        }
    }

    /// Create a context backed by [`BackendClient`].
    ///
    /// # Errors
    ///
    /// Returns error if the client cannot be built from `config`.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = BackendClient::new(config)?;
        Ok(Self::new(Arc::new(client), config.reset_delay))
    }

    /// Delegated click handler for the display region.
    ///
    /// A click on an enabled save control resolves the control's index
    /// against the result store and runs the save workflow. If the store
    /// was replaced since the control was mounted, nothing is saved.
    pub async fn handle_click(&self, target: &Control) -> ViewResult<ClickOutcome> {
        let state = target.snapshot().await;
        if !state.has_class(labels::SAVE_BUTTON_CLASS) || state.disabled {
            return Ok(ClickOutcome::Ignored);
        }

        let raw_index = state.attributes.get("data-index").cloned().unwrap_or_default();
        let article = match raw_index.parse::<usize>() {
            Ok(index) => match state.generation {
                Some(generation) => self.store.resolve(generation, index).await,
                None => self.store.get(index).await,
            },
            Err(_) => None,
        };

        let Some(article) = article else {
            tracing::error!(index = %raw_index, "Could not retrieve article data for index");
            return Err(ViewError::record_not_found(raw_index));
        };

        // Another click may have claimed the control since the snapshot.
        Ok(self
            .save
            .run_if_enabled(&article, target)
            .await
            .map_or(ClickOutcome::Ignored, ClickOutcome::Save))
    }
}

impl std::fmt::Debug for ViewContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewContext").field("save", &self.save).finish_non_exhaustive()
    }
}
