use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::error::ServiceResult;
use crate::http_server::state::AppState;
use crate::services::owner::{CreateOwnerRequest, OwnerService};
use crate::services::serialize::OwnerView;

pub async fn list_owners(
    State(app_state): State<Arc<AppState>>,
) -> ServiceResult<Json<Vec<OwnerView>>> {
    let owners = OwnerService::new(app_state.db.clone()).list().await?;
    Ok(Json(owners))
}

pub async fn add_owner(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<CreateOwnerRequest>, JsonRejection>,
) -> ServiceResult<Json<OwnerView>> {
    let Json(request) = payload?;
    let owner = OwnerService::new(app_state.db.clone())
        .create(request)
        .await?;
    Ok(Json(owner))
}
