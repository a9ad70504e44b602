use clap::Parser;
use repo_carousel::utils::{logger, validation::Validate};
use repo_carousel::{CliConfig, GithubPipeline, LocalStorage, PortfolioEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("🚀 Starting repo-carousel");
    if config.verbose {
        // The token stays out of the logs.
        tracing::debug!(
            "CLI config: account={}, api_base={}, output_path={}, container_width={}",
            config.account,
            config.api_base,
            config.output_path,
            config.container_width
        );
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = GithubPipeline::new(storage, config)?;

    let engine = PortfolioEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Portfolio build completed successfully!");
            tracing::info!("📁 Output saved to: {}", output_path);
            println!("✅ Portfolio build completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Portfolio build failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                repo_carousel::utils::error::ErrorSeverity::Low => 0,
                repo_carousel::utils::error::ErrorSeverity::Medium => 2,
                repo_carousel::utils::error::ErrorSeverity::High => 1,
                repo_carousel::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
