//! Wiring & DI. Entry point: load config, pick the student source, attach sinks, run.
//! No business logic here; grading lives in the domain and TranscriptBuilder.

use dotenv::dotenv;
use gpa_transcript::adapters::input::{JsonFileSource, SampleSource};
use gpa_transcript::adapters::output::{
    ConsoleRenderer, CsvFileSink, JsonFileSink, MarkdownReportSink,
};
use gpa_transcript::domain::{GradeCalculator, GradingPolicy};
use gpa_transcript::ports::StudentSource;
use gpa_transcript::shared::config::AppConfig;
use gpa_transcript::usecases::{ReportService, TranscriptBuilder};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    // Logs go to stderr; stdout carries only the rendered transcripts.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Ok(path) = &env_loaded {
        info!(path = %path.display(), "loaded .env");
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "invalid configuration, using defaults");
        AppConfig::default()
    });

    // --- Input: first CLI argument, then config, then built-in sample ---
    let input_path = std::env::args()
        .nth(1)
        .or_else(|| cfg.input_path().map(str::to_string));
    let source: Arc<dyn StudentSource> = match input_path {
        Some(path) => Arc::new(JsonFileSource::new(path)),
        None => {
            info!("no input path configured, using built-in sample data");
            Arc::new(SampleSource)
        }
    };

    // --- Sinks: console always, file exports when configured ---
    let builder = TranscriptBuilder::new(GradeCalculator::new(GradingPolicy::STANDARD));
    let mut service = ReportService::new(source, builder)
        .with_sink(Arc::new(ConsoleRenderer::new(cfg.color_or_default())));
    if let Some(path) = cfg.json_output() {
        service = service.with_sink(Arc::new(JsonFileSink::new(path)));
    }
    if let Some(path) = cfg.csv_output() {
        service = service.with_sink(Arc::new(CsvFileSink::new(path)));
    }
    if let Some(dir) = cfg.reports_dir() {
        service = service.with_sink(Arc::new(MarkdownReportSink::new(dir)));
    }

    service
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
