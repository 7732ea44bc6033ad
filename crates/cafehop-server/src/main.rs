mod api;
mod search;

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use cafehop_overpass::{OverpassClient, RetryPolicy};
use cafehop_yelp::YelpClient;

use crate::api::{build_app, AppState};
use crate::search::SearchService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Arc::new(cafehop_core::load_app_config()?);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    tracing::info!(?config, "starting cafehop-server");

    let pool = cafehop_db::connect_pool(
        &config.database_url,
        cafehop_db::PoolConfig {
            max_connections: config.db_max_connections,
            min_connections: config.db_min_connections,
            acquire_timeout_secs: config.db_acquire_timeout_secs,
        },
    )
    .await?;
    cafehop_db::run_migrations(&pool).await?;

    let overpass = OverpassClient::new(
        config.overpass_mirrors.clone(),
        Duration::from_secs(config.overpass_timeout_secs),
        RetryPolicy {
            max_attempts: config.overpass_max_attempts,
            base_delay_ms: config.overpass_backoff_base_ms,
            step_ms: config.overpass_backoff_step_ms,
        },
    )?;

    let yelp = match &config.yelp_api_key {
        Some(key) => Some(YelpClient::new(
            key,
            Duration::from_millis(config.yelp_timeout_ms),
        )?),
        None => {
            tracing::info!("YELP_API_KEY not set, thumbnail enrichment disabled");
            None
        }
    };

    let state = AppState {
        pool,
        search: Arc::new(SearchService::new(overpass, yelp)),
    };
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
