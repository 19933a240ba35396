use std::path::Path;
use crate::cli::commands::ServeArgs;
use crate::config::load_or_default;
use crate::errors::OpenQuestError;
use crate::api;
use tracing::info;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB: &str = "./data/openquest.db";

pub async fn handle_serve(args: ServeArgs) -> Result<(), OpenQuestError> {
    let config = load_or_default(args.config.as_deref().map(Path::new)).await?;
    let server = config.server.clone();

    // Flags win over the config file
    let host = args.host
        .or_else(|| server.as_ref().and_then(|s| s.host.clone()))
        .unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = args.port
        .or_else(|| server.as_ref().and_then(|s| s.port))
        .unwrap_or(DEFAULT_PORT);
    let db = args.db
        .or_else(|| server.as_ref().and_then(|s| s.db.clone()))
        .unwrap_or_else(|| DEFAULT_DB.to_string());

    info!(host = %host, port, db = %db, "Starting API server");

    let state = api::create_app_state(&db, config.fork_rules()).await?;
    let app = api::build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| OpenQuestError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
