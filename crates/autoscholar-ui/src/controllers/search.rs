//! Author search form handler.

use super::ViewContext;
use crate::error::{ViewError, ViewResult};
use crate::render;

const EMPTY_AUTHOR_ID: &str = "Please enter an Author ID.";
const LOADING: &str = "Loading scholar information...";

/// Handles submission of the author search form.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchController;

impl SearchController {
    /// Run a search for the identifier in the author input.
    ///
    /// On success the result store is replaced, the author table is
    /// rendered, and its save controls are mounted. Returns the number of
    /// articles. On failure the region shows an error and the store keeps
    /// its previous contents.
    pub async fn submit(&self, ctx: &ViewContext) -> ViewResult<usize> {
        let author_id = ctx.author_input.value().await.trim().to_string();

        if author_id.is_empty() {
            ctx.display.set_html(render::error_message(EMPTY_AUTHOR_ID)).await;
            return Err(ViewError::validation("authorId", EMPTY_AUTHOR_ID));
        }

        ctx.display.set_html(render::loading_message(LOADING)).await;
        tracing::info!(author_id = %author_id, "Searching author");

        match ctx.backend.fetch_author(&author_id).await {
            Ok(info) => {
                let html = render::author_table(&info);
                let articles = info.articles.unwrap_or_default();
                let count = articles.len();

                let generation = ctx.store.replace(articles).await;
                let mounted = ctx.display.mount(html, generation).await;

                tracing::info!(author_id = %author_id, articles = count, mounted, "Search complete");
                Ok(count)
            }
            Err(err) => {
                tracing::error!(author_id = %author_id, error = %err, "Fetch error");
                ctx.display
                    .set_html(render::error_message(&format!(
                        "Error retrieving data: {}. Check the logs for details.",
                        err.to_user_message()
                    )))
                    .await;
                Err(err.into())
            }
        }
    }
}
