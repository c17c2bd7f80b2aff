//! CLI runner - wires settings, credential, source, collector and sink

use crate::cli::commands::Cli;
use crate::config::{ApiKey, Settings};
use crate::engine::{Collector, RunSummary};
use crate::error::Result;
use crate::output::{CollectionSink, JsonFileSink, JsonWriterConfig};
use crate::pagination::RetryPolicy;
use crate::source::StoreApiSource;
use tracing::info;

type EnvLookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// CLI runner
pub struct Runner {
    cli: Cli,
    env: EnvLookup,
}

impl Runner {
    /// Create a runner that reads the process environment
    pub fn new(cli: Cli) -> Self {
        Self::with_env(cli, |var| std::env::var(var).ok())
    }

    /// Create a runner with a custom environment lookup
    pub fn with_env<F>(cli: Cli, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            cli,
            env: Box::new(lookup),
        }
    }

    /// Resolve settings: file (if any), then command-line overrides
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.cli.config {
            Some(path) => Settings::from_file(path)?,
            None => Settings::default(),
        };

        if let Some(output) = &self.cli.output {
            settings.output.path.clone_from(output);
        }
        if self.cli.pretty {
            settings.output.pretty = true;
        }
        if let Some(page_size) = self.cli.page_size {
            settings.page_size = page_size;
        }
        if let Some(base_url) = &self.cli.base_url {
            settings.base_url.clone_from(base_url);
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Collect the catalog and write it out.
    ///
    /// Without a credential nothing is fetched and nothing is written. Errors
    /// are returned unlogged; the caller reports them once.
    pub async fn run(&self) -> Result<RunSummary> {
        let api_key = ApiKey::from_lookup(|var| (self.env)(var))?;
        let settings = self.settings()?;

        let source = StoreApiSource::from_settings(&settings, api_key)?;
        let sink = JsonFileSink::new(&settings.output.path)
            .with_config(JsonWriterConfig::new().with_pretty(settings.output.pretty));

        info!(
            base_url = %settings.base_url,
            page_size = settings.page_size,
            output = %sink.describe(),
            "Collecting app list"
        );

        let mut collector =
            Collector::new(source).with_retry_policy(RetryPolicy::from(settings.retry));
        let summary = collector.run(&sink).await?;

        info!(
            items = summary.stats.items_collected,
            pages = summary.stats.pages_fetched,
            retries = summary.stats.retries,
            elapsed_ms = summary.elapsed().num_milliseconds(),
            "Collection complete"
        );
        Ok(summary)
    }
}

impl std::fmt::Debug for Runner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runner")
            .field("cli", &self.cli)
            .finish_non_exhaustive()
    }
}
