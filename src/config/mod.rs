pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "repo-carousel")]
#[command(about = "Builds a static project carousel page from a GitHub account")]
pub struct CliConfig {
    /// GitHub account whose public repositories are showcased
    #[arg(long)]
    pub account: String,

    /// API token; unauthenticated requests share a small per-IP quota
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[arg(long, default_value = "https://api.github.com")]
    pub api_base: String,

    #[arg(long, default_value = "./dist")]
    pub output_path: String,

    #[arg(long, default_value = "Portfolio")]
    pub page_title: String,

    /// Widest layout the carousel is rendered for, in px
    #[arg(long, default_value = "1280")]
    pub container_width: f64,

    #[arg(long, default_value = "5")]
    pub concurrent_requests: usize,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log memory usage while building")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn account(&self) -> &str {
        &self.account
    }

    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn page_title(&self) -> &str {
        &self.page_title
    }

    fn container_width(&self) -> f64 {
        self.container_width
    }

    fn concurrent_requests(&self) -> usize {
        self.concurrent_requests
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validation::validate_non_empty_string("account", &self.account)?;
        validation::validate_url("api_base", &self.api_base)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_positive_number("concurrent_requests", self.concurrent_requests, 1)?;
        validation::validate_range("container_width", self.container_width, 240.0, 10_000.0)?;
        Ok(())
    }
}
