use clap::Parser;
use scorecard_etl::utils::error::ErrorSeverity;
use scorecard_etl::utils::{logger, validation::Validate};
use scorecard_etl::{AdmissionsConfig, AdmissionsJob, EtlEngine, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AdmissionsConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("🚀 Reading College Scorecard data...");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
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

    let storage = LocalStorage::new();
    let output_path = config.output.clone();
    let engine = EtlEngine::new_with_monitoring(AdmissionsJob, storage, config, monitor_enabled);

    match engine.run().await {
        Ok(summary) => {
            println!("Done!");
            println!("Total rows processed: {}", summary.rows_processed);
            println!("Rows with admission data: {}", summary.rows_kept);
            println!("Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Extraction failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
