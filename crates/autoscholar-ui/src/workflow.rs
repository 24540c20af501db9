//! Save workflow: one persistence request driving one control.
//!
//! Control transitions:
//!
//! ```text
//! idle/failed --click--> saving (disabled) --2xx-->  saved  (disabled, final)
//!                                          \--error--> failed (enabled)
//!                                                        |
//!                                          reset delay   v
//!                                          label back to call-to-action, marker cleared
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::client::Backend;
use crate::config::labels;
use crate::models::Article;
use crate::state::{Control, ControlState};

/// Result of one save attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Backend stored the article.
    Saved {
        /// Identifier assigned by the backend, if it reported one.
        id: Option<i64>,
    },
    /// Request failed; the control is enabled again for retry.
    Failed {
        /// Message shown to the user.
        message: String,
    },
}

impl SaveOutcome {
    /// Returns true for [`SaveOutcome::Saved`].
    #[must_use]
    pub const fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }
}

/// Runs save requests against a backend.
#[derive(Clone)]
pub struct SaveWorkflow {
    backend: Arc<dyn Backend>,
    reset_delay: Duration,
}

impl SaveWorkflow {
    /// Create a workflow that resets failed controls after `reset_delay`.
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>, reset_delay: Duration) -> Self {
        Self { backend, reset_delay }
    }

    /// Save `article`, reflecting progress on `control`.
    ///
    /// Only `control` is touched. On failure a reset timer is spawned for
    /// this control alone; it fires even if the user has retried meanwhile.
    pub async fn run(&self, article: &Article, control: &Control) -> SaveOutcome {
        control.update(mark_saving).await;
        self.send(article, control).await
    }

    /// Like [`SaveWorkflow::run`], but only if `control` is enabled.
    ///
    /// The enabled check and the switch to saving happen under one lock, so
    /// of two concurrent activations only one sends a request. Returns `None`
    /// for the one that lost.
    pub async fn run_if_enabled(
        &self,
        article: &Article,
        control: &Control,
    ) -> Option<SaveOutcome> {
        if !control.update_if(|s| !s.disabled, mark_saving).await {
            return None;
        }
        Some(self.send(article, control).await)
    }

    async fn send(&self, article: &Article, control: &Control) -> SaveOutcome {
        match self.backend.save_article(article).await {
            Ok(stored) => {
                control
                    .update(|s| {
                        s.label = labels::SAVED.to_string();
                        s.classes.remove(labels::SAVING_CLASS);
                        s.classes.insert(labels::SAVED_CLASS.to_string());
                    })
                    .await;

                tracing::info!(id = ?stored.id, title = ?article.title, "Article saved");
                SaveOutcome::Saved { id: stored.id }
            }
            Err(err) => {
                tracing::error!(error = %err, title = ?article.title, "Save article failed");
                let message = err.to_user_message();

                control
                    .update(|s| {
                        s.label = labels::FAILED.to_string();
                        s.classes.remove(labels::SAVING_CLASS);
                        s.classes.insert(labels::FAILED_CLASS.to_string());
                        s.disabled = false;
                    })
                    .await;

                self.schedule_reset(control.clone());
                SaveOutcome::Failed { message }
            }
        }
    }

    fn schedule_reset(&self, control: Control) {
        let delay = self.reset_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            control
                .update(|s| {
                    s.label = labels::CALL_TO_ACTION.to_string();
                    s.classes.remove(labels::FAILED_CLASS);
                })
                .await;
            tracing::debug!("Failed save control reset");
        });
    }
}

fn mark_saving(s: &mut ControlState) {
    s.disabled = true;
    s.label = labels::SAVING.to_string();
    s.classes.remove(labels::FAILED_CLASS);
    s.classes.insert(labels::SAVING_CLASS.to_string());
}

impl std::fmt::Debug for SaveWorkflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaveWorkflow").field("reset_delay", &self.reset_delay).finish()
    }
}
