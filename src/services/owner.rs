use std::sync::Arc;

use serde::Deserialize;

use crate::database::{Database, NewOwner};
use crate::error::{ServiceResult, present, required};
use crate::services::serialize::{self, OwnerView};

#[derive(Debug, Default, Clone, Deserialize)]
pub struct CreateOwnerRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub king: Option<bool>,
}

pub struct OwnerService {
    db: Arc<Database>,
}

impl OwnerService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> ServiceResult<Vec<OwnerView>> {
        let owners = self.db.list_owners().await?;
        Ok(serialize::many(&owners))
    }

    pub async fn create(&self, request: CreateOwnerRequest) -> ServiceResult<OwnerView> {
        let owner = self
            .db
            .insert_owner(NewOwner {
                first_name: required("first_name", request.first_name)?,
                last_name: required("last_name", request.last_name)?,
                email: required("email", request.email)?,
                password: required("password", request.password)?,
                king: present("king", request.king)?,
            })
            .await?;

        Ok(serialize::one(&owner))
    }
}
