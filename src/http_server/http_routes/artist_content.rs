use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::error::ServiceResult;
use crate::http_server::state::AppState;
use crate::services::artist_content::{ArtistContentService, CreateArtistContentRequest};
use crate::services::serialize::ArtistContentView;

pub async fn list_artist_content(
    State(app_state): State<Arc<AppState>>,
    Path(artist_id): Path<i64>,
) -> ServiceResult<Json<Vec<ArtistContentView>>> {
    let contents = ArtistContentService::new(app_state.db.clone())
        .list_for_artist(artist_id)
        .await?;
    Ok(Json(contents))
}

pub async fn add_artist_content(
    State(app_state): State<Arc<AppState>>,
    Path(artist_id): Path<i64>,
    payload: Result<Json<CreateArtistContentRequest>, JsonRejection>,
) -> ServiceResult<Json<ArtistContentView>> {
    let Json(request) = payload?;
    let content = ArtistContentService::new(app_state.db.clone())
        .create(artist_id, request)
        .await?;
    Ok(Json(content))
}
