pub mod builder;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod model;
pub mod output;

pub use builder::{PageExtractor, PageExtractorBuilder};
pub use crate::config::{load_config, ExtractorConfig, Preset};
pub use error::ExtractError;
pub use extract::extract_from_html;
pub use model::{CellLayout, ExtractionMode, ExtractionResult, OutputRow};

/// Run one extraction with the given configuration
///
/// # Arguments
/// * `config` - URL, selector, mode, layout and output path for the run
///
/// # Returns
/// * `Ok(ExtractionResult)` - The lines that were written
/// * `Err(ExtractError)` - The first step that failed; nothing is written on fetch,
///   parse or selection failures
pub fn run(config: ExtractorConfig) -> Result<ExtractionResult, ExtractError> {
    PageExtractor::new(config).run()
}
