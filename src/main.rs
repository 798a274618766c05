//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tg_mentions::adapters::source::LocalDirSource;
use tg_mentions::adapters::ui::TuiInputPort;
use tg_mentions::ports::{DocumentSource, InputPort};
use tg_mentions::usecases::ReportService;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Ok(path) = &env_loaded {
        info!(path = %path.display(), "loaded .env");
    }

    tg_mentions::adapters::ui::init_ui();

    let cfg = tg_mentions::shared::config::AppConfig::load().unwrap_or_default();
    let export_dir = PathBuf::from(cfg.export_dir_or_default());
    if !export_dir.is_dir() {
        tokio::fs::create_dir_all(&export_dir)
            .await
            .map_err(|e| anyhow::anyhow!("create export dir {}: {}", export_dir.display(), e))?;
    }
    let export_dir_abs = export_dir
        .canonicalize()
        .unwrap_or_else(|_| export_dir.clone());
    info!(path = %export_dir_abs.display(), "export directory");

    // --- Adapters and services ---
    let source: Arc<dyn DocumentSource> = Arc::new(LocalDirSource::new(&export_dir));
    let report_service = Arc::new(ReportService::new(Arc::clone(&source)));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(source, report_service));

    // --- Run (menu loop: queue files -> analyze -> report) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
