//! AutoScholar view layer - command line entry point.
//!
//! Drives the controllers against a live backend and prints the display
//! region, or writes it as a standalone page.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use autoscholar_ui::{
    ClickOutcome, Config, LibraryViewController, SaveOutcome, SearchController, ViewContext, render,
};

#[derive(Parser, Debug)]
#[command(name = "autoscholar-ui")]
#[command(about = "Search scholarly authors and manage saved articles")]
#[command(version)]
struct Cli {
    /// Backend origin (overrides AUTOSCHOLAR_BACKEND_URL)
    #[arg(long, global = true)]
    backend_url: Option<String>,

    /// Delay before a failed save control resets, in milliseconds
    #[arg(long, global = true)]
    reset_delay_ms: Option<u64>,

    /// Write a standalone HTML page here instead of printing the fragment
    #[arg(long, short, global = true)]
    output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG", global = true)]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search an author and optionally save articles by row index
    Search {
        /// Author identifier
        author_id: String,

        /// Row index to save (repeatable; saves run concurrently)
        #[arg(long = "save", value_name = "INDEX")]
        save: Vec<usize>,
    },
    /// Show the articles saved in the database
    Library,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // stdout carries the rendered HTML
    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let mut config = Config::from_env()?;
    if let Some(url) = cli.backend_url {
        config.backend_url = url;
    }
    if let Some(ms) = cli.reset_delay_ms {
        config = config.with_reset_delay(Duration::from_millis(ms));
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = %config.backend_url,
        "Starting AutoScholar view"
    );

    let ctx = ViewContext::from_config(&config)?;

    let (title, result) = match cli.command {
        Command::Search { author_id, save } => {
            ctx.author_input.set(author_id).await;
            let result = SearchController.submit(&ctx).await;
            if result.is_ok() && !save.is_empty() {
                save_rows(&ctx, &save).await;
            }
            ("Author Articles", result)
        }
        Command::Library => ("Saved Database Articles", LibraryViewController.activate(&ctx).await),
    };

    let html = ctx.display.live_html().await;
    match cli.output {
        Some(path) => {
            tokio::fs::write(&path, render::document(title, &html))
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "Page written");
        }
        None => println!("{html}"),
    }

    result.map(|_| ()).map_err(Into::into)
}

/// Click the save controls for `indices` concurrently.
async fn save_rows(ctx: &ViewContext, indices: &[usize]) {
    let mut controls = Vec::with_capacity(indices.len());
    for &index in indices {
        match ctx.display.save_control(index).await {
            Some(control) => controls.push((index, control)),
            None => tracing::warn!(index, "No save control at this index"),
        }
    }

    let outcomes =
        futures::future::join_all(controls.iter().map(|(_, control)| ctx.handle_click(control)))
            .await;

    for ((index, _), outcome) in controls.iter().zip(outcomes) {
        match outcome {
            Ok(ClickOutcome::Save(SaveOutcome::Saved { id })) => {
                tracing::info!(index, id = ?id, "Saved");
            }
            Ok(ClickOutcome::Save(SaveOutcome::Failed { message })) => {
                tracing::warn!(index, %message, "Save failed");
            }
            Ok(ClickOutcome::Ignored) => tracing::debug!(index, "Click ignored"),
            Err(err) => tracing::warn!(index, error = %err, "Click not handled"),
        }
    }
}
