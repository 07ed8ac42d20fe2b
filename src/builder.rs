use log::info;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{ExtractorConfig, Preset};
use crate::extract::extract_from_html;
use crate::fetcher::RequestFetcher;
use crate::model::{CellLayout, ExtractionMode, ExtractionResult, OutputRow};
use crate::output::write_row;
use crate::ExtractError;

/// Fetches one page, extracts text with a selector and writes it as a CSV row
#[derive(Debug, Clone)]
pub struct PageExtractor {
    config: ExtractorConfig,
}

impl PageExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Creates a new builder starting from the default preset
    ///
    /// # Example
    /// ```
    /// use page_extract::PageExtractor;
    ///
    /// let extractor = PageExtractor::builder().selector("h2").build();
    /// ```
    pub fn builder() -> PageExtractorBuilder {
        PageExtractorBuilder::default()
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Fetches the page and returns the reduced lines without writing anything
    pub fn extract(&self) -> Result<ExtractionResult, ExtractError> {
        let fetcher =
            RequestFetcher::new(Some(self.config.timeout), self.config.user_agent.as_deref())?;
        let html = fetcher.fetch(&self.config.url)?;
        extract_from_html(&html, &self.config.selector, self.config.mode)
    }

    /// Runs the whole pipeline and overwrites the output file.
    ///
    /// The output file is only opened once extraction has succeeded.
    pub fn run(&self) -> Result<ExtractionResult, ExtractError> {
        let result = self.extract()?;
        let row = OutputRow::from_result(&result, self.config.layout)?;
        write_row(&row, &self.config.output)?;

        info!(
            "Extracted {} line(s) from {} into {}",
            result.len(),
            self.config.url,
            self.config.output.display()
        );
        Ok(result)
    }
}

/// Builder for configuring a [`PageExtractor`]
#[derive(Debug, Default)]
pub struct PageExtractorBuilder {
    preset: Preset,
    url: Option<String>,
    selector: Option<String>,
    mode: Option<ExtractionMode>,
    layout: CellLayout,
    output: Option<PathBuf>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl PageExtractorBuilder {
    /// Start from one of the shipped presets; explicit settings still win
    pub fn preset(mut self, preset: Preset) -> Self {
        self.preset = preset;
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    pub fn mode(mut self, mode: ExtractionMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn layout(mut self, layout: CellLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Set a timeout for the HTTP request
    ///
    /// A zero duration is ignored and the default timeout is kept.
    ///
    /// # Example
    /// ```
    /// use page_extract::PageExtractor;
    /// use std::time::Duration;
    ///
    /// let extractor = PageExtractor::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .build();
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> PageExtractor {
        let mut config = ExtractorConfig::from_preset(self.preset);
        if let Some(url) = self.url {
            config.url = url;
        }
        if let Some(selector) = self.selector {
            config.selector = selector;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(timeout) = self.timeout.filter(|t| !t.is_zero()) {
            config.timeout = timeout;
        }
        config.layout = self.layout;
        config.user_agent = self.user_agent;

        PageExtractor::new(config)
    }
}
