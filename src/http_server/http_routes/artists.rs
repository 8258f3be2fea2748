use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::HeaderMap,
};

use crate::error::ServiceResult;
use crate::http_server::state::AppState;
use crate::services::artist::{ArtistService, CreateArtistRequest, PatchArtistRequest};
use crate::services::serialize::ArtistView;

/// Header naming the artist on whose behalf a privileged request is made.
pub const ACTOR_HEADER: &str = "x-actor-id";

/// Raw value of the acting-artist header. Non-UTF-8 values come through as an
/// empty string so the service rejects them like any other malformed id.
fn actor_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(ACTOR_HEADER)
        .map(|value| value.to_str().unwrap_or_default())
}

pub async fn list_artists(
    State(app_state): State<Arc<AppState>>,
) -> ServiceResult<Json<Vec<ArtistView>>> {
    let artists = ArtistService::new(app_state.db.clone()).list().await?;
    Ok(Json(artists))
}

pub async fn get_artist(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ServiceResult<Json<ArtistView>> {
    let artist = ArtistService::new(app_state.db.clone()).get(id).await?;
    Ok(Json(artist))
}

pub async fn add_artist(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<CreateArtistRequest>, JsonRejection>,
) -> ServiceResult<Json<ArtistView>> {
    let Json(request) = payload?;
    let artist = ArtistService::new(app_state.db.clone())
        .create(request)
        .await?;
    Ok(Json(artist))
}

pub async fn patch_artist(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    payload: Result<Json<PatchArtistRequest>, JsonRejection>,
) -> ServiceResult<Json<ArtistView>> {
    let Json(request) = payload?;
    let artist = ArtistService::new(app_state.db.clone())
        .patch(id, request)
        .await?;
    Ok(Json(artist))
}

pub async fn remove_artist(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> ServiceResult<String> {
    ArtistService::new(app_state.db.clone())
        .delete(id, actor_header(&headers))
        .await
}
