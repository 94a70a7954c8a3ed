use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub product_codes: Vec<String>,
    pub base_url: String,
    #[serde(default = "default_env")]
    pub env: String,
    pub file_id: String,
    pub google_credentials: PathBuf,
    /// Target tab inside the document, the first sheet when unset
    #[serde(default)]
    pub sheet_id: Option<i32>,
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default = "default_include_prices")]
    pub include_prices: bool,
    #[serde(default)]
    pub footer: FooterConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FooterConfig {
    pub label: String,
    pub link_text: String,
    pub link_url: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            label: "Powered by".to_string(),
            link_text: "iOSmates".to_string(),
            link_url: "https://iosmates.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Prod,
}

impl Environment {
    /// Unrecognized values fall back to the verbose dev setup
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "prod" => Environment::Prod,
            _ => Environment::Dev,
        }
    }

    pub fn default_log_level(&self) -> &'static str {
        match self {
            Environment::Dev => concat!("info,", env!("CARGO_CRATE_NAME"), "=debug"),
            Environment::Prod => "info",
        }
    }
}

fn default_env() -> String {
    "dev".to_string()
}

fn default_delay_ms() -> u64 {
    500
}

fn default_include_prices() -> bool {
    true
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "Config file not found at {:?}. Please create one.",
                path
            )));
        }

        let contents = fs::read_to_string(path)?;
        contents.parse()
    }

    pub fn environment(&self) -> Environment {
        Environment::parse(&self.env)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Base URL guaranteed to end with a slash so endpoint paths join onto it
    pub fn normalized_base_url(&self) -> String {
        match self.base_url.ends_with('/') {
            true => self.base_url.clone(),
            false => format!("{}/", self.base_url),
        }
    }

    fn validate(&self) -> Result<()> {
        Url::parse(&self.base_url).map_err(|e| {
            AppError::Config(format!("Invalid base_url {:?}: {}", self.base_url, e))
        })?;

        if self.file_id.is_empty() {
            return Err(AppError::Config(
                "file_id must be set in config file".to_string(),
            ));
        }

        if self.google_credentials.as_os_str().is_empty() {
            return Err(AppError::Config(
                "google_credentials must be set in config file".to_string(),
            ));
        }

        Ok(())
    }
}

impl std::str::FromStr for Config {
    type Err = AppError;

    fn from_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use super::*;

    pub(crate) fn mock_config(product_codes: &[&str]) -> Config {
        Config {
            product_codes: product_codes.iter().map(|c| c.to_string()).collect(),
            base_url: "https://vendor.example/".to_string(),
            env: "dev".to_string(),
            file_id: "file_123".to_string(),
            google_credentials: PathBuf::from("credentials.json"),
            sheet_id: None,
            delay_ms: 0,
            include_prices: true,
            footer: FooterConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        product_codes = ["A1", "A2"]
        base_url = "https://vendor.example/"
        file_id = "file_123"
        google_credentials = "credentials.json"
    "#;

    #[test]
    fn test_config_defaults() {
        let config: Config = MINIMAL.parse().unwrap();

        assert_eq!(config.product_codes, vec!["A1", "A2"]);
        assert_eq!(config.environment(), Environment::Dev);
        assert_eq!(config.delay(), Duration::from_millis(500));
        assert!(config.include_prices);
        assert_eq!(config.sheet_id, None);
        assert_eq!(config.footer, FooterConfig::default());
    }

    #[test]
    fn test_config_overrides() {
        let contents = format!(
            "{}\nenv = \"PROD\"\ndelay_ms = 1000\ninclude_prices = false\nsheet_id = 7\n[footer]\nlink_url = \"https://example.com\"\n",
            MINIMAL
        );
        let config: Config = contents.parse().unwrap();

        assert_eq!(config.environment(), Environment::Prod);
        assert_eq!(config.delay(), Duration::from_secs(1));
        assert!(!config.include_prices);
        assert_eq!(config.sheet_id, Some(7));
        assert_eq!(config.footer.link_url, "https://example.com");
        assert_eq!(config.footer.label, "Powered by");
    }

    #[test]
    fn test_config_serialization() {
        let config = test_helpers::mock_config(&["A1"]);

        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = serialized.parse().unwrap();

        assert_eq!(config.product_codes, deserialized.product_codes);
        assert_eq!(config.file_id, deserialized.file_id);
    }

    #[test]
    fn test_environment_fallback() {
        assert_eq!(Environment::parse(" prod "), Environment::Prod);
        assert_eq!(Environment::parse("dev"), Environment::Dev);
        assert_eq!(Environment::parse("staging"), Environment::Dev);
        assert_eq!(Environment::parse(""), Environment::Dev);
    }

    #[test]
    fn test_default_log_level() {
        assert_eq!(Environment::Dev.default_log_level(), "info,warranty_sheet=debug");
        assert_eq!(Environment::Prod.default_log_level(), "info");
    }

    #[test]
    fn test_invalid_base_url() {
        let contents = MINIMAL.replace("https://vendor.example/", "not a url");
        let err = contents.parse::<Config>().unwrap_err();
        assert!(matches!(err, AppError::Config(_)), "got {:?}", err);
    }

    #[test]
    fn test_missing_file_id() {
        let contents = MINIMAL.replace("file_123", "");
        let err = contents.parse::<Config>().unwrap_err();
        assert!(matches!(err, AppError::Config(_)), "got {:?}", err);
    }

    #[test]
    fn test_missing_required_key() {
        let err = "base_url = \"https://vendor.example/\"".parse::<Config>().unwrap_err();
        assert!(matches!(err, AppError::Config(_)), "got {:?}", err);
    }

    #[test]
    fn test_normalized_base_url() {
        let mut config = test_helpers::mock_config(&[]);
        config.base_url = "https://vendor.example/ua".to_string();
        assert_eq!(config.normalized_base_url(), "https://vendor.example/ua/");

        config.base_url = "https://vendor.example/".to_string();
        assert_eq!(config.normalized_base_url(), "https://vendor.example/");
    }

    #[test]
    fn test_missing_config_file() {
        let err = Config::load_from(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, AppError::Config(_)), "got {:?}", err);
    }
}
