pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::LocalStorage, CliConfig};

pub use crate::core::{engine::PortfolioEngine, pipeline::GithubPipeline};
pub use crate::utils::error::{PortfolioError, Result};
