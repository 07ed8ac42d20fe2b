use thiserror::Error;

/// Errors that can occur while extracting a page
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Request failed, timed out, or came back with a non-2xx status
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The CSS selector could not be parsed
    #[error("Failed to parse selector `{selector}`: {message}")]
    ParseError { selector: String, message: String },

    /// Nothing was left to write after reducing the matched text
    #[error("Selector `{selector}` produced no text to write")]
    SelectionEmpty { selector: String },

    /// Failed to write the CSV output
    #[error("Failed to write output: {0}")]
    WriteError(#[from] csv::Error),

    /// Failed to render the extracted lines as a single cell
    #[error("Failed to encode extracted lines: {0}")]
    EncodeError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
