use serde::Deserialize;

/// How matched lines are reduced to what gets written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMode {
    /// Keep only the first line that is not empty
    #[default]
    FirstNonempty,
    /// Keep every line, empty ones included
    All,
}

/// How an extraction result is laid out in the CSV row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellLayout {
    /// The whole list goes into a single field as a JSON array, e.g. `["Hello"]`
    #[default]
    Stringified,
    /// One field per line
    Spread,
}

/// Ordered text fragments produced by one run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractionResult {
    pub lines: Vec<String>,
}

impl ExtractionResult {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

/// A single CSV record, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub fields: Vec<String>,
}

impl OutputRow {
    /// Lays out `result` as one row.
    ///
    /// With [`CellLayout::Stringified`] the row always has exactly one field.
    pub fn from_result(
        result: &ExtractionResult,
        layout: CellLayout,
    ) -> Result<Self, serde_json::Error> {
        let fields = match layout {
            CellLayout::Stringified => vec![serde_json::to_string(&result.lines)?],
            CellLayout::Spread => result.lines.clone(),
        };
        Ok(Self { fields })
    }
}
