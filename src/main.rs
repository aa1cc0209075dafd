use clap::Parser;
use water_level_etl::utils::logger;
use water_level_etl::{CliArgs, EtlEngine, EtlError, HttpDayFetcher, LocalStorage, WaterLevelPipeline};

fn exit_with(e: &EtlError) -> ! {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);
    tracing::debug!("CLI args: {:?}", args);

    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    println!("{}", config.range.start());
    println!("{}", config.range.end());

    let fetcher = match HttpDayFetcher::new(&config.base_url, config.timeout) {
        Ok(fetcher) => fetcher,
        Err(e) => exit_with(&e),
    };
    let storage = LocalStorage::new(config.output_dir.clone());
    let report_path = config.report_path.clone();

    let pipeline = WaterLevelPipeline::new(storage, fetcher, config);
    let engine = EtlEngine::new(pipeline);

    let report = match engine.run().await {
        Ok(report) => report,
        Err(e) => exit_with(&e),
    };

    if let Some(path) = report_path {
        if let Err(e) = report.save(&path) {
            exit_with(&e);
        }
        tracing::info!("📝 Run report written to {}", path.display());
    }

    println!(
        "✅ {} observations for station {} saved to: {}",
        report.lines_written, report.station, report.output_path
    );
    if !report.anomalies.is_empty() {
        println!(
            "⚠ {} lines did not match the expected hh:mm,level shape and were skipped",
            report.anomalies.len()
        );
    }

    if !report.is_complete() {
        eprintln!(
            "❌ {} of {} days could not be downloaded:",
            report.failed_days.len(),
            report.days_requested
        );
        for failure in &report.failed_days {
            eprintln!("   {}: {}", failure.date, failure.reason);
        }
        std::process::exit(2);
    }
}
