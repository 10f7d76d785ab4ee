//! CLI runner - executes commands

use crate::catalog::{Catalog, CatalogSnapshot, LoadOutcome};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::CatalogConfig;
use crate::error::{Error, Result};
use crate::fetch::PageFetcher;
use crate::model::{Entry, ResponseEnvelope};
use serde_json::{json, Value};
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        match &self.cli.command {
            Commands::Page { offset } => self.page(&config, *offset).await,
            Commands::Load { pages } => self.load(&config, *pages).await,
        }
    }

    /// Config file (or defaults) with command-line overrides applied
    pub fn load_config(&self) -> Result<CatalogConfig> {
        let mut config = match &self.cli.config {
            Some(path) => CatalogConfig::from_file(path)?,
            None => CatalogConfig::default(),
        };
        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(limit) = self.cli.limit {
            config.page_size = limit;
        }
        if self.cli.verbose {
            config.log_bodies = true;
        }
        config.validate()?;
        Ok(config)
    }

    async fn page(&self, config: &CatalogConfig, offset: u32) -> Result<()> {
        let fetcher = PageFetcher::from_config(config)?;
        let envelope = fetcher.fetch_page(config.page_size()?, offset).await?;

        match self.cli.format {
            OutputFormat::Json => print_json(&envelope_json(&envelope))?,
            OutputFormat::Pretty => {
                println!(
                    "offset {offset}: {} of {} entries",
                    envelope.len(),
                    envelope.total_count
                );
                for entry in &envelope.results {
                    println!("{}", entry_line(entry));
                }
            }
        }
        Ok(())
    }

    async fn load(&self, config: &CatalogConfig, max_pages: Option<u32>) -> Result<()> {
        let catalog = Catalog::from_config(config)?;
        let mut pages = 0;

        while max_pages.map_or(true, |max| pages < max) {
            match catalog.load_next_page().await? {
                LoadOutcome::Merged(report) => {
                    pages += 1;
                    info!(
                        page = report.page,
                        added = report.added,
                        duplicates = report.duplicates,
                        "loaded page"
                    );
                }
                LoadOutcome::Exhausted => break,
                other => {
                    return Err(Error::Other(format!("unexpected load outcome: {other:?}")));
                }
            }
        }

        let snapshot = catalog.snapshot().await;
        match self.cli.format {
            OutputFormat::Json => print_json(&snapshot.to_json())?,
            OutputFormat::Pretty => print_pretty(&snapshot),
        }
        Ok(())
    }
}

fn envelope_json(envelope: &ResponseEnvelope) -> Value {
    json!({
        "count": envelope.total_count,
        "next": envelope.next_cursor,
        "previous": envelope.previous_cursor,
        "results": envelope.results.iter().map(Entry::to_json).collect::<Vec<_>>(),
    })
}

fn entry_line(entry: &Entry) -> String {
    format!("{:>6}  {:<24} {}", entry.id(), entry.display_name(), entry.image_url())
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_pretty(snapshot: &CatalogSnapshot) {
    let total = snapshot
        .total_count
        .map_or_else(|| "?".to_string(), |t| t.to_string());
    println!(
        "{} entries in {} pages (remote total {total}, more: {})",
        snapshot.entries.len(),
        snapshot.pages_loaded,
        snapshot.has_more
    );
    let mut current_page = None;
    for entry in &snapshot.entries {
        if current_page != Some(entry.page()) {
            current_page = Some(entry.page());
            println!("-- page {}", entry.page());
        }
        println!("{}", entry_line(entry));
    }
}
