use log::{debug, warn};
use scraper::{Html, Selector};

use crate::model::{ExtractionMode, ExtractionResult};
use crate::ExtractError;

/// Parses a whole HTML document.
///
/// The parser is lenient and always produces a tree; whatever it had to
/// repair is only logged.
pub fn parse(html: &str) -> Html {
    let document = Html::parse_document(html);
    if !document.errors.is_empty() {
        debug!("HTML parser recovered from {} errors", document.errors.len());
    }
    document
}

/// Compiles a CSS selector, mapping failures to [`ExtractError::ParseError`].
pub fn compile_selector(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::ParseError {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Concatenates the text of every element matching `selector` and splits it into lines.
pub fn select(document: &Html, selector: &Selector) -> Vec<String> {
    let mut matched = 0usize;
    let text: String = document
        .select(selector)
        .inspect(|_| matched += 1)
        .flat_map(|element| element.text())
        .collect();

    let lines = split_lines(&text);
    debug!("{} elements matched, {} lines", matched, lines.len());
    lines
}

/// Splits on `\n`, keeping leading and inner empty lines but dropping trailing ones.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Reduces selected lines according to `mode`.
///
/// Fails with [`ExtractError::SelectionEmpty`] when nothing would be written.
pub fn reduce(
    lines: Vec<String>,
    mode: ExtractionMode,
    selector: &str,
) -> Result<ExtractionResult, ExtractError> {
    let empty = || ExtractError::SelectionEmpty {
        selector: selector.to_string(),
    };

    match mode {
        ExtractionMode::FirstNonempty => {
            let first = lines.into_iter().find(|line| !line.is_empty()).ok_or_else(empty)?;
            Ok(ExtractionResult::new(vec![first]))
        }
        ExtractionMode::All => {
            if lines.is_empty() {
                return Err(empty());
            }
            if lines.iter().all(|line| line.trim().is_empty()) {
                warn!("Selector `{}` matched only blank text", selector);
            }
            Ok(ExtractionResult::new(lines))
        }
    }
}

/// Runs parse, select and reduce over an HTML string.
pub fn extract_from_html(
    html: &str,
    selector: &str,
    mode: ExtractionMode,
) -> Result<ExtractionResult, ExtractError> {
    let compiled = compile_selector(selector)?;
    let document = parse(html);
    let lines = select(&document, &compiled);
    reduce(lines, mode, selector)
}
