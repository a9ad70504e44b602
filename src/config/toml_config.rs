use crate::core::ConfigProvider;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_API_BASE: &str = "https://api.github.com";
const DEFAULT_PAGE_TITLE: &str = "Portfolio";
const DEFAULT_CONTAINER_WIDTH: f64 = 1280.0;
const DEFAULT_CONCURRENT_REQUESTS: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub portfolio: PortfolioConfig,
    pub source: SourceConfig,
    pub render: RenderConfig,
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub account: String,
    pub api_base: Option<String>,
    pub token: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub concurrent_requests: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub container_width: Option<f64>,
    pub page_title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub system_stats: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PortfolioError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PortfolioError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` occurrences with the environment value.
    /// Unresolved placeholders are left in place.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_non_empty_string("source.account", &self.source.account)?;
        crate::utils::validation::validate_url("source.api_base", self.api_base())?;
        crate::utils::validation::validate_path("load.output_path", &self.load.output_path)?;

        if let Some(concurrent) = self.source.concurrent_requests {
            crate::utils::validation::validate_positive_number(
                "source.concurrent_requests",
                concurrent,
                1,
            )?;
        }

        if let Some(width) = self.render.container_width {
            crate::utils::validation::validate_range(
                "render.container_width",
                width,
                240.0,
                10_000.0,
            )?;
        }

        Ok(())
    }

    pub fn account(&self) -> &str {
        &self.source.account
    }

    pub fn api_base(&self) -> &str {
        self.source.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    /// A placeholder left unresolved by [`Self::substitute_env_vars`] is not
    /// a usable credential; treat it as absent.
    pub fn token(&self) -> Option<&str> {
        self.source
            .token
            .as_deref()
            .filter(|token| !token.is_empty() && !token.starts_with("${"))
    }

    pub fn output_path(&self) -> &str {
        &self.load.output_path
    }

    pub fn page_title(&self) -> &str {
        self.render
            .page_title
            .as_deref()
            .unwrap_or(DEFAULT_PAGE_TITLE)
    }

    pub fn container_width(&self) -> f64 {
        self.render
            .container_width
            .unwrap_or(DEFAULT_CONTAINER_WIDTH)
    }

    pub fn concurrent_requests(&self) -> usize {
        self.source
            .concurrent_requests
            .unwrap_or(DEFAULT_CONCURRENT_REQUESTS)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn account(&self) -> &str {
        self.account()
    }

    fn api_base(&self) -> &str {
        self.api_base()
    }

    fn token(&self) -> Option<&str> {
        self.token()
    }

    fn output_path(&self) -> &str {
        self.output_path()
    }

    fn page_title(&self) -> &str {
        self.page_title()
    }

    fn container_width(&self) -> f64 {
        self.container_width()
    }

    fn concurrent_requests(&self) -> usize {
        self.concurrent_requests()
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.source.timeout_seconds
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
