use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post},
};
use color_eyre::eyre::{Context, eyre};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    database::Database,
    http_server::{
        http_routes::{artist_content, artists, owners},
        state::AppState,
    },
};

async fn root() -> &'static str {
    "Artist roster is up"
}

pub struct HttpServerConfig {
    pub port: u16,
    pub database: Database,
}

pub fn router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/artists", get(artists::list_artists))
        .route(
            "/artist/{id}",
            get(artists::get_artist).patch(artists::patch_artist),
        )
        .route("/add_artist", post(artists::add_artist))
        .route("/remove_artist/{id}", delete(artists::remove_artist))
        .route("/owners", get(owners::list_owners))
        .route("/add_owner", post(owners::add_owner))
        .route(
            "/artist/{id}/content",
            get(artist_content::list_artist_content).post(artist_content::add_artist_content),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}

pub async fn start(config: HttpServerConfig) -> color_eyre::Result<()> {
    let HttpServerConfig { port, database } = config;

    let app_state = Arc::new(AppState {
        db: Arc::new(database),
    });
    let app = router(app_state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .wrap_err_with(|| eyre!("Failed to bind to port {}", port))?;
    log::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .await
        .wrap_err("Failed to start HTTP server")?;

    Ok(())
}
