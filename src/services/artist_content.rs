use std::sync::Arc;

use serde::Deserialize;

use crate::database::{Database, NewArtistContent};
use crate::error::{ServiceError, ServiceResult, required};
use crate::services::serialize::{self, ArtistContentView};

#[derive(Debug, Default, Clone, Deserialize)]
pub struct CreateArtistContentRequest {
    pub cover_image: Option<String>,
    pub artist_name: Option<String>,
    pub bio: Option<String>,
}

pub struct ArtistContentService {
    db: Arc<Database>,
}

impl ArtistContentService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    async fn ensure_artist(&self, artist_id: i64) -> ServiceResult<()> {
        match self.db.get_artist(artist_id).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::not_found("Artist", artist_id)),
        }
    }

    pub async fn list_for_artist(&self, artist_id: i64) -> ServiceResult<Vec<ArtistContentView>> {
        self.ensure_artist(artist_id).await?;
        let contents = self.db.list_artist_contents(artist_id).await?;
        Ok(serialize::many(&contents))
    }

    pub async fn create(
        &self,
        artist_id: i64,
        request: CreateArtistContentRequest,
    ) -> ServiceResult<ArtistContentView> {
        let content = NewArtistContent {
            artist_id,
            cover_image: required("cover_image", request.cover_image)?,
            artist_name: required("artist_name", request.artist_name)?,
            bio: required("bio", request.bio)?,
        };
        self.ensure_artist(artist_id).await?;

        let content = self.db.insert_artist_content(content).await?;
        Ok(serialize::one(&content))
    }
}
