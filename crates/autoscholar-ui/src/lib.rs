//! AutoScholar view layer
//!
//! A headless view layer for an author search and article library backend.
//! Searches an author through the backend proxy, renders the publication
//! list as HTML, saves individual publications, and shows the stored set.
//!
//! # Features
//!
//! - **Explicit view state**: result store, display region, and controls live
//!   in a [`ViewContext`] instead of globals
//! - **Save workflow**: per-control state machine with a retry-friendly reset
//! - **Pure rendering**: HTML fragments from plain data, with "N/A" fallbacks
//!
//! # Example
//!
//! ```no_run
//! use autoscholar_ui::{Config, SearchController, ViewContext};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let ctx = ViewContext::from_config(&config)?;
//!
//!     ctx.author_input.set("4bahYMkAAAAJ").await;
//!     SearchController.submit(&ctx).await?;
//!     println!("{}", ctx.display.html().await);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod render;
pub mod state;
pub mod workflow;

pub use client::{Backend, BackendClient};
pub use config::Config;
pub use controllers::{ClickOutcome, LibraryViewController, SearchController, ViewContext};
pub use error::{ClientError, ViewError};
pub use workflow::{SaveOutcome, SaveWorkflow};
