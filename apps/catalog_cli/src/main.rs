use std::path::PathBuf;

use anyhow::{Context, Result};
use catalog_client::{
    default_controls, loader::source_for, CatalogPage, Markup, MemorySurface, PageShell,
};
use clap::{Parser, Subcommand};
use shared::filter::ALL_FILTER;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod config;

use config::{load_settings, Overrides};

#[derive(Parser, Debug)]
#[command(name = "catalog", about = "Render a course catalog into a filterable card grid")]
struct Cli {
    /// Catalog location: an http(s) URL, a JSON file or a site directory.
    #[arg(long)]
    catalog: Option<String>,
    #[arg(long)]
    container_id: Option<String>,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    timeout_secs: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the catalog page, optionally with one filter applied.
    Render {
        #[arg(long, default_value = ALL_FILTER)]
        filter: String,
        /// Only emit the container markup instead of the whole page.
        #[arg(long)]
        fragment: bool,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List the filter keys offered for the loaded catalog.
    Levels,
    /// Read filter keys from stdin and print the container after each one.
    Interactive,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let settings = load_settings(Overrides {
        catalog_source: cli.catalog,
        container_id: cli.container_id,
        page_title: cli.title,
        fetch_timeout_secs: cli.timeout_secs,
    });
    let source = source_for(&settings.catalog_source, settings.fetch_timeout())
        .with_context(|| format!("invalid catalog source '{}'", settings.catalog_source))?;

    let mut page =
        CatalogPage::start(source.as_ref(), MemorySurface::new(), default_controls).await;

    match cli.command {
        Command::Render {
            filter,
            fragment,
            output,
        } => {
            if filter != ALL_FILTER {
                if let Err(err) = page.on_filter_activated(&filter) {
                    warn!(error = %err, "render: filter ignored");
                }
            }
            let markup = if fragment {
                page.current().clone()
            } else {
                page.document(&PageShell {
                    title: &settings.page_title,
                    container_id: &settings.container_id,
                })
            };
            write_output(output, &markup).await?;
        }
        Command::Levels => {
            for control in page.controls() {
                println!("{}\t{}", control.key, control.label);
            }
        }
        Command::Interactive => {
            println!("{}", page.current());
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines
                .next_line()
                .await
                .context("failed to read filter key from stdin")?
            {
                let key = line.trim();
                if key.is_empty() {
                    continue;
                }
                match page.on_filter_activated(key) {
                    Ok(markup) => println!("{markup}"),
                    Err(err) => warn!(error = %err, "interactive: filter ignored"),
                }
            }
        }
    }

    Ok(())
}

async fn write_output(output: Option<PathBuf>, markup: &Markup) -> Result<()> {
    match output {
        Some(path) => tokio::fs::write(&path, markup.as_str())
            .await
            .with_context(|| format!("failed to write '{}'", path.display())),
        None => {
            println!("{markup}");
            Ok(())
        }
    }
}
