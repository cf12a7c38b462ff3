use clap::Parser;
use discontinuity_scan::utils::{logger, validation::Validate};
use discontinuity_scan::{CliConfig, FunctionKind, LocalStorage, ScanEngine, ScanPipeline};

fn main() {
    let config = CliConfig::parse();

    if config.list_functions {
        for identifier in FunctionKind::identifiers() {
            println!("{}", identifier);
        }
        return;
    }

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting discontinuity-scan CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = ScanPipeline::new(storage, config);
    let engine = ScanEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run() {
        Ok(output) => {
            println!("{}", output.report.summary());
            println!("📁 Output saved to: {}", output.output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Scan failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}
