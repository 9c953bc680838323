//! AdScope server: competitor ad tracking and analysis.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use adscope_core::config::AppConfig;
use adscope_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("ADSCOPE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting AdScope v{}", env!("CARGO_PKG_VERSION"));

    // ── Database connection + migrations ─────────────────────────
    tracing::info!("Connecting to database...");
    let db_pool = adscope_database::connection::create_pool(&config.database).await?;

    tracing::info!("Running database migrations...");
    adscope_database::migration::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations complete");

    // ── Repositories ─────────────────────────────────────────────
    let brands = adscope_database::repositories::BrandRepository::new(db_pool.clone());
    let competitors = adscope_database::repositories::CompetitorRepository::new(db_pool.clone());
    let ads = adscope_database::repositories::AdRepository::new(db_pool.clone());
    let analyses = adscope_database::repositories::AnalysisRepository::new(db_pool.clone());
    let settings = adscope_database::repositories::SettingsRepository::new(db_pool.clone());
    let jobs = adscope_database::repositories::JobRepository::new(db_pool.clone());

    // ── External collaborators ───────────────────────────────────
    let scraper = adscope_scraper::from_config(&config.scraper);
    let analyzer = Arc::new(adscope_gemini::GeminiAnalyzer::new(&config.gemini)?);
    let drive_connector = adscope_drive::GoogleDriveConnector::new(&config.drive);
    let drive_oauth = drive_connector.oauth().clone();

    // ── Tasks, dispatcher, processor ─────────────────────────────
    let tasks = adscope_worker::TaskContext {
        brands: brands.clone(),
        competitors: competitors.clone(),
        ads: ads.clone(),
        analyses: analyses.clone(),
        settings: settings.clone(),
        scraper,
        analyzer,
        drive: Arc::new(drive_connector),
        drive_root: config.drive.root_folder.clone(),
    };
    let dispatcher = adscope_worker::JobDispatcher::new(jobs.clone());
    let processor =
        adscope_worker::JobProcessor::new(jobs.clone(), tasks.clone(), config.jobs.clone());

    // ── HTTP server ──────────────────────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app_state = adscope_api::AppState {
        config: Arc::new(config),
        db_pool,
        brands,
        competitors,
        ads,
        analyses,
        settings,
        jobs,
        dispatcher,
        processor,
        tasks,
        drive_oauth,
    };

    let app = adscope_api::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("AdScope server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("AdScope server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
