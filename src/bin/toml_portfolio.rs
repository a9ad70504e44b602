use clap::Parser;
use repo_carousel::config::toml_config::TomlConfig;
use repo_carousel::core::carousel::CarouselState;
use repo_carousel::utils::{logger, validation::Validate};
use repo_carousel::{GithubPipeline, LocalStorage, PortfolioEngine};

#[derive(Parser)]
#[command(name = "toml-portfolio")]
#[command(about = "Portfolio page builder with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "portfolio-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - show what would be fetched and rendered without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based portfolio builder");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No requests will be made");
        perform_dry_run(&config);
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path().to_string());
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

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!(
        "  Portfolio: {} v{}",
        config.portfolio.name, config.portfolio.version
    );
    println!("  Account: {}", config.account());
    println!("  API Base: {}", config.api_base());
    println!("  Output: {}", config.output_path());
    println!("  Page Title: {}", config.page_title());
    println!("  Container Width: {}px", config.container_width());
    println!("  Concurrent Requests: {}", config.concurrent_requests());

    if config.token().is_some() {
        println!("  Auth: token configured");
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig) {
    println!("🔍 Dry Run Analysis:");
    println!();

    println!("📡 Requests that would be made:");
    println!(
        "  {}/users/{}/repos?per_page=100&sort=updated",
        config.api_base(),
        config.account()
    );
    println!(
        "  {}/repos/{}/<repo>/languages (one per repository)",
        config.api_base(),
        config.account()
    );
    println!(
        "  {}/repos/{}/<repo>/contents/package.json (one per repository, falling back to project-info.json)",
        config.api_base(),
        config.account()
    );

    println!();
    println!("📐 Carousel Geometry:");
    let state = CarouselState::new(0, config.container_width());
    println!("  Container: {}px", config.container_width());
    println!("  Cards per view: {}", state.visible_cards());
    println!("  Card width: {:.1}px", state.card_width());

    println!();
    println!("💾 Output:");
    println!("  {}/index.html", config.output_path());

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during the actual run.");
}
