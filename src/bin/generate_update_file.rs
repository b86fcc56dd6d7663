use clap::Parser;
use scorecard_etl::transform::travel::{
    CLOSE_DRIVE_STATES, FAR_DRIVE_STATES, MEDIUM_DRIVE_STATES,
};
use scorecard_etl::utils::error::ErrorSeverity;
use scorecard_etl::utils::{logger, validation::Validate};
use scorecard_etl::{EtlEngine, LocalStorage, UpdateFileConfig, UpdateFileJob};

fn print_travel_banner() {
    println!("Generating comprehensive update file...");
    println!("Travel cost logic:");
    println!("  CLOSE DRIVE ({}): $600/year", CLOSE_DRIVE_STATES.join(", "));
    println!("  MEDIUM DRIVE ({}): $1,000/year", MEDIUM_DRIVE_STATES.join(", "));
    println!("  FAR DRIVE ({}): $1,500/year", FAR_DRIVE_STATES.join(", "));
    println!("  FLY (all other states): $2,500/year");
    println!();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = UpdateFileConfig::parse();

    logger::init_cli_logger(config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    print_travel_banner();

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new();
    let output_path = config.output.clone();
    let engine =
        EtlEngine::new_with_monitoring(UpdateFileJob::default(), storage, config, monitor_enabled);

    match engine.run().await {
        Ok(summary) => {
            println!("Done!");
            println!("Total schools: {}", summary.rows_kept);
            for (label, count) in &summary.extra {
                println!("{}: {}", label, count);
            }
            println!();
            println!("Output saved to: {}", output_path);
            println!();
            println!("Next steps:");
            println!("1. Open this CSV in Google Sheets");
            println!("2. Add columns to the schools table (run the ALTER TABLE SQL)");
            println!("3. Use this data to update your schools table");
        }
        Err(e) => {
            tracing::error!(
                "❌ Update-file generation failed: {} (Category: {:?}, Severity: {:?})",
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
