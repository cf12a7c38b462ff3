use anyhow::Context;
use clap::Parser;
use discontinuity_scan::core::catalog::RealFunction;
use discontinuity_scan::core::ConfigProvider;
use discontinuity_scan::utils::{logger, validation::Validate};
use discontinuity_scan::{LocalStorage, ScanEngine, ScanPipeline, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-scan")]
#[command(about = "Discontinuity scan driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "scan-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Override the function from config
    #[arg(long)]
    function: Option<String>,

    /// Show what would be scanned without sampling or writing anything
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("failed to load config file '{}'", args.config))?;

    let verbose = args.verbose || config.log_level() == Some("debug");
    if config.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("🚀 Starting TOML-based discontinuity scan");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Some(function) = args.function.clone() {
        tracing::info!("🔧 Function overridden to: {}", function);
        config.scan.function = function;
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be sampled or written");
        perform_dry_run(&config)?;
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path());
    let pipeline = ScanPipeline::new(storage, config);
    let engine = ScanEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run() {
        Ok(output) => {
            println!("{}", output.report.summary());
            println!("📁 Output saved to: {}", output.output_path);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Scan failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!(
        "  Pipeline: {} v{}",
        config.pipeline.name, config.pipeline.version
    );
    println!("  Function: {}", config.scan.function);
    println!("  Range: [{}, {}]", config.x_min(), config.x_max());
    println!("  Sample points: {}", config.num_points());
    println!("  Output: {}", config.output_path());
    println!("  Formats: {}", config.output_formats().join(", "));
    if let Some(archive) = config.archive_name() {
        println!("  Archive: {}", archive);
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig) -> anyhow::Result<()> {
    let function = config.function()?;
    let spacing = (config.x_max() - config.x_min()) / (config.num_points() - 1) as f64;

    println!("🔍 Dry Run Analysis:");
    println!("  Sample spacing: {:.6}", spacing);

    match function.crossing_rule() {
        Some(rule) => {
            let jumps = rule.known_jumps_in(config.x_min(), config.x_max());
            println!(
                "  {} known jumps of {} inside the range: {:?}",
                jumps.len(),
                function.identifier(),
                jumps
            );
        }
        None => println!("  Only non-finite values and large jumps will be flagged"),
    }

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during an actual run.");
    Ok(())
}
