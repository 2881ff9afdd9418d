//! Web layer module
//!
//! Thin HTTP interface over the game repository and the report engine.
//! Handlers parse requests into typed commands/queries at the boundary,
//! delegate, and serialize the result; domain invariants live in the
//! repository, never here.

use anyhow::Result;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    config::Config,
    database::{
        Database,
        repositories::{GameSeaOrmRepository, ReferenceSeaOrmRepository},
    },
    reports::ReportEngine,
};

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod responses;

// Re-export commonly used types
pub use responses::ErrorBody;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub database: Database,
    pub games: GameSeaOrmRepository,
    pub reference: ReferenceSeaOrmRepository,
    pub reports: ReportEngine,
}

impl AppState {
    pub fn new(config: Config, database: Database) -> Self {
        let games = GameSeaOrmRepository::new(database.connection());
        let reference = ReferenceSeaOrmRepository::new(database.connection());
        let reports = ReportEngine::new(games.clone());

        Self {
            config,
            database,
            games,
            reference,
            reports,
        }
    }
}

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(config: Config, database: Database) -> Result<Self> {
        let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port).parse()?;
        let state = AppState::new(config, database);
        let app = create_router(state);

        Ok(Self { app, addr })
    }

    /// Start the web server and run until shutdown
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        info!("Listening on http://{}", self.addr);

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let mut sigterm = signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        let mut sigint = signal(SignalKind::interrupt()).expect("failed to install SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down gracefully");
            }
            _ = sigint.recv() => {
                info!("Received SIGINT (Ctrl+C), shutting down gracefully");
            }
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down gracefully");
    }
}

/// Build the full application router
///
/// Public so integration tests can drive the API without binding a socket.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/api-docs/openapi.json", get(openapi::serve_openapi))
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // Games CRUD
        .route("/games", get(handlers::games::list_games))
        .route("/games", post(handlers::games::create_game))
        .route("/games/{id}", get(handlers::games::get_game))
        .route("/games/{id}", put(handlers::games::update_game))
        .route("/games/{id}", delete(handlers::games::delete_game))
        // Reporting
        .route("/report/games", get(handlers::reports::games_report))
        // Reference data
        .route("/sports", get(handlers::reference::list_sports))
        .route("/teams", get(handlers::reference::list_teams))
        .route("/venues", get(handlers::reference::list_venues))
}
