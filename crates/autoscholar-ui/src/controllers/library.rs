//! Stored articles view.

use super::ViewContext;
use crate::error::ViewResult;
use crate::render;

const LOADING: &str = "Loading saved articles...";

/// Handles the "view saved articles" control.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibraryViewController;

impl LibraryViewController {
    /// Show every stored article. Returns the number shown.
    ///
    /// The result store is left alone; the stored-articles table carries
    /// no save controls.
    pub async fn activate(&self, ctx: &ViewContext) -> ViewResult<usize> {
        ctx.author_input.clear().await;
        ctx.display.set_html(render::loading_message(LOADING)).await;

        match ctx.backend.list_articles().await {
            Ok(articles) => {
                tracing::info!(articles = articles.len(), "Loaded stored articles");
                ctx.display.set_html(render::library_table(&articles)).await;
                Ok(articles.len())
            }
            Err(err) => {
                tracing::error!(error = %err, "Database fetch error");
                ctx.display
                    .set_html(render::error_message(&format!(
                        "Database access error: {}. Ensure the backend service is running and the database is accessible.",
                        err.to_user_message()
                    )))
                    .await;
                Err(err.into())
            }
        }
    }
}
