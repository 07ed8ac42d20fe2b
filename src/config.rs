use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetcher::DEFAULT_TIMEOUT;
use crate::model::{CellLayout, ExtractionMode};

const ENV_PREFIX: &str = "PAGE_EXTRACT";

/// The two page/selector pairings the tool ships with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// First non-empty paragraph line of the Hydrogen article
    #[default]
    Hydrogen,
    /// Every section heading line of the Chemical element article
    ChemicalElement,
}

impl Preset {
    pub fn url(&self) -> &'static str {
        match self {
            Preset::Hydrogen => "https://en.wikipedia.org/wiki/Hydrogen",
            Preset::ChemicalElement => "https://en.wikipedia.org/wiki/Chemical_element",
        }
    }

    pub fn selector(&self) -> &'static str {
        match self {
            Preset::Hydrogen => "p",
            Preset::ChemicalElement => "h2",
        }
    }

    pub fn mode(&self) -> ExtractionMode {
        match self {
            Preset::Hydrogen => ExtractionMode::FirstNonempty,
            Preset::ChemicalElement => ExtractionMode::All,
        }
    }
}

/// Everything a run needs, resolved from a preset plus overrides
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractorConfig {
    pub url: String,
    pub selector: String,
    pub mode: ExtractionMode,
    pub layout: CellLayout,
    pub output: PathBuf,
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl ExtractorConfig {
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            url: preset.url().to_string(),
            selector: preset.selector().to_string(),
            mode: preset.mode(),
            layout: CellLayout::default(),
            output: PathBuf::from(default_output()),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with PAGE_EXTRACT__ prefix
    /// 2. page-extract.toml file in current directory
    /// 3. Values of the selected preset
    ///
    /// Environment variable format: PAGE_EXTRACT__SELECTOR
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None)
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

/// Raw settings as read from file and environment; unset keys fall back to the preset
#[derive(Debug, Deserialize, Default)]
struct Settings {
    #[serde(default)]
    preset: Preset,
    url: Option<String>,
    selector: Option<String>,
    mode: Option<ExtractionMode>,
    #[serde(default)]
    layout: CellLayout,
    #[serde(default = "default_output")]
    output: String,
    #[serde(default = "default_timeout")]
    timeout: u64,
    user_agent: Option<String>,
}

impl Settings {
    fn resolve(self) -> Result<ExtractorConfig, ConfigError> {
        if self.timeout == 0 {
            return Err(ConfigError::Message(
                "timeout must be at least 1 second".to_string(),
            ));
        }

        let preset = self.preset;
        Ok(ExtractorConfig {
            url: self.url.unwrap_or_else(|| preset.url().to_string()),
            selector: self.selector.unwrap_or_else(|| preset.selector().to_string()),
            mode: self.mode.unwrap_or_else(|| preset.mode()),
            layout: self.layout,
            output: PathBuf::from(self.output),
            timeout: Duration::from_secs(self.timeout),
            user_agent: self.user_agent,
        })
    }
}

fn default_output() -> String {
    "data.csv".to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

/// Load configuration, reading `file` instead of `page-extract.toml` when given
pub fn load_config(file: Option<&Path>) -> Result<ExtractorConfig, ConfigError> {
    load_config_with_env(file, ENV_PREFIX)
}

fn load_config_with_env(
    file: Option<&Path>,
    env_prefix: &str,
) -> Result<ExtractorConfig, ConfigError> {
    let file_source = match file {
        Some(path) => File::from(path).required(true),
        // Optional config file (can be missing)
        None => File::with_name("page-extract").required(false),
    };

    let settings = Config::builder()
        .add_source(file_source)
        // Values stay strings so that e.g. a user agent of "1.0" is kept verbatim.
        // Use double underscore as separator: PAGE_EXTRACT__USER_AGENT
        .add_source(Environment::with_prefix(env_prefix).separator("__"))
        .build()?;

    let settings: Settings = settings.try_deserialize()?;
    settings.resolve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn test_default_is_hydrogen() {
        let config = ExtractorConfig::default();
        assert_eq!(config.url, "https://en.wikipedia.org/wiki/Hydrogen");
        assert_eq!(config.selector, "p");
        assert_eq!(config.mode, ExtractionMode::FirstNonempty);
        assert_eq!(config.layout, CellLayout::Stringified);
        assert_eq!(config.output, PathBuf::from("data.csv"));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_output(), "data.csv");
        assert_eq!(default_timeout(), 30);
        assert_eq!(Duration::from_secs(default_timeout()), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_chemical_element_preset() {
        let config = ExtractorConfig::from_preset(Preset::ChemicalElement);
        assert_eq!(config.url, "https://en.wikipedia.org/wiki/Chemical_element");
        assert_eq!(config.selector, "h2");
        assert_eq!(config.mode, ExtractionMode::All);
    }

    #[test]
    fn test_file_selects_preset_and_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            r#"
preset = "chemical_element"
selector = "h3"
layout = "spread"
output = "out.csv"
timeout = 5
"#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.url, "https://en.wikipedia.org/wiki/Chemical_element");
        assert_eq!(config.selector, "h3");
        assert_eq!(config.mode, ExtractionMode::All);
        assert_eq!(config.layout, CellLayout::Spread);
        assert_eq!(config.output, PathBuf::from("out.csv"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "mode = \"some_lines\"\n").unwrap();

        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zero.toml");
        fs::write(&path, "timeout = 0\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn test_env_overrides_file_and_preset() {
        // A prefix of its own keeps this test from leaking into the other load_config tests
        let prefix = "PAGE_EXTRACT_ENV_TEST";
        let vars = [
            ("PAGE_EXTRACT_ENV_TEST__PRESET", "chemical_element"),
            ("PAGE_EXTRACT_ENV_TEST__SELECTOR", "h2"),
            ("PAGE_EXTRACT_ENV_TEST__USER_AGENT", "1.0"),
            ("PAGE_EXTRACT_ENV_TEST__TIMEOUT", "12"),
        ];
        for (key, value) in vars {
            env::set_var(key, value);
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("env.toml");
        fs::write(&path, "selector = \"h3\"\noutput = \"from-file.csv\"\n").unwrap();

        let result = load_config_with_env(Some(&path), prefix);

        for (key, _) in vars {
            env::remove_var(key);
        }

        let config = result.unwrap();
        assert_eq!(config.url, "https://en.wikipedia.org/wiki/Chemical_element");
        assert_eq!(config.mode, ExtractionMode::All);
        assert_eq!(config.selector, "h2");
        assert_eq!(config.output, PathBuf::from("from-file.csv"));
        assert_eq!(config.user_agent.as_deref(), Some("1.0"));
        assert_eq!(config.timeout, Duration::from_secs(12));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("absent.toml"))).is_err());
    }
}
