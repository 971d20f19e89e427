use anyhow::Context;
use clap::Parser;
use gca_etl::core::output;
use gca_etl::utils::logger;
use gca_etl::{CliConfig, EtlEngine, GcaError, StaticSource, TargetingPipeline, TieredStore};

const TOP_LOCATIONS_SHOWN: usize = 5;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting gca-etl CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli).await {
        tracing::error!("❌ Error during collection run: {:#}", e);
        eprintln!("❌ Error: {:#}", e);
        if let Some(gca_error) = e.downcast_ref::<GcaError>() {
            eprintln!("💡 Suggestion: {}", gca_error.recovery_suggestion());
        }
        std::process::exit(1);
    }
}

async fn run(cli: &CliConfig) -> anyhow::Result<()> {
    let config = cli.resolve().context("Invalid configuration")?;
    let report_only = config.report_only();

    if !report_only {
        println!("{}", output::banner());
    }

    let store = TieredStore::open(&config.storage)
        .await
        .context("Failed to open storage")?;
    let pipeline = TargetingPipeline::new(StaticSource, store, config.categories.clone());
    let engine = EtlEngine::new(pipeline);

    // 無論成功與否都要關閉儲存連線
    let outcome = engine.run().await;
    let closed = engine.pipeline().close().await;
    let outcome = outcome?;
    closed?;

    let report_json = output::report_json(&outcome.report)?;
    if report_only {
        println!("{}", report_json);
        return Ok(());
    }

    println!("{}", output::format_summary(&outcome.record_sets));
    println!(
        "{}",
        output::format_top_locations(&outcome.report, TOP_LOCATIONS_SHOWN)
    );

    if config.storage.output == gca_etl::OutputFormat::Json {
        println!("{}", report_json);
    }

    Ok(())
}
