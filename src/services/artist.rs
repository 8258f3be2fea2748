use std::sync::Arc;

use serde::Deserialize;

use crate::database::{ArtistIdentity, Database, NewArtist};
use crate::error::{ServiceError, ServiceResult, present, required};
use crate::services::serialize::{self, ArtistView};

/// Body of an artist creation request. Every field is optional here so a
/// missing one surfaces as a validation error instead of a decode failure.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CreateArtistRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub admin_artist: Option<bool>,
    pub owner_id: Option<i64>,
}

/// Body of an artist patch request. All four identity fields must be supplied.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PatchArtistRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl CreateArtistRequest {
    fn validate(self) -> ServiceResult<NewArtist> {
        Ok(NewArtist {
            first_name: required("first_name", self.first_name)?,
            last_name: required("last_name", self.last_name)?,
            email: required("email", self.email)?,
            password: required("password", self.password)?,
            admin_artist: present("admin_artist", self.admin_artist)?,
            owner_id: self.owner_id,
        })
    }
}

impl PatchArtistRequest {
    fn validate(self) -> ServiceResult<ArtistIdentity> {
        Ok(ArtistIdentity {
            first_name: required("first_name", self.first_name)?,
            last_name: required("last_name", self.last_name)?,
            email: required("email", self.email)?,
            password: required("password", self.password)?,
        })
    }
}

fn parse_actor_id(actor: Option<&str>) -> ServiceResult<Option<i64>> {
    actor
        .map(|raw| {
            raw.trim().parse().map_err(|_| {
                ServiceError::Validation("acting artist must be an artist id".to_string())
            })
        })
        .transpose()
}

pub struct ArtistService {
    db: Arc<Database>,
}

impl ArtistService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> ServiceResult<Vec<ArtistView>> {
        let artists = self.db.list_artists().await?;
        log::debug!("Listing {} artists", artists.len());
        Ok(serialize::many(&artists))
    }

    pub async fn get(&self, id: i64) -> ServiceResult<ArtistView> {
        log::debug!("Fetching artist {}", id);
        self.db
            .get_artist(id)
            .await?
            .map(|artist| serialize::one(&artist))
            .ok_or_else(|| ServiceError::not_found("Artist", id))
    }

    pub async fn create(&self, request: CreateArtistRequest) -> ServiceResult<ArtistView> {
        let new_artist = request.validate()?;

        if let Some(owner_id) = new_artist.owner_id {
            if self.db.get_owner(owner_id).await?.is_none() {
                return Err(ServiceError::ConstraintViolation(format!(
                    "owner {owner_id} does not exist"
                )));
            }
        }

        let artist = self.db.insert_artist(new_artist).await?;
        Ok(serialize::one(&artist))
    }

    pub async fn patch(&self, id: i64, request: PatchArtistRequest) -> ServiceResult<ArtistView> {
        let identity = request.validate()?;
        let artist = self.db.update_artist(id, identity).await?;
        Ok(serialize::one(&artist))
    }

    /// Removes artist `id` on behalf of the artist named by `actor`, the raw
    /// acting-artist id as received from the caller.
    ///
    /// The target is resolved first, so an unknown id is always reported as not
    /// found, whatever the actor. The actor must then parse, exist and carry
    /// `admin_artist`.
    pub async fn delete(&self, id: i64, actor: Option<&str>) -> ServiceResult<String> {
        if self.db.get_artist(id).await?.is_none() {
            return Err(ServiceError::not_found("Artist", id));
        }

        let actor_id = parse_actor_id(actor)?
            .ok_or_else(|| ServiceError::Forbidden("no acting artist given".to_string()))?;
        let actor = self.db.get_artist(actor_id).await?.ok_or_else(|| {
            ServiceError::Forbidden(format!("acting artist {actor_id} does not exist"))
        })?;

        if !actor.admin_artist {
            log::warn!(
                "Artist {} attempted to remove artist {} without admin rights",
                actor_id,
                id
            );
            return Err(ServiceError::Forbidden(format!(
                "artist {actor_id} is not an admin"
            )));
        }

        self.db.delete_artist(id).await?;
        Ok(format!("Artist {id} removed"))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::database::{NewArtistContent, NewOwner};
    use crate::test_utils::test_db;

    fn ada(admin_artist: bool) -> CreateArtistRequest {
        CreateArtistRequest {
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            email: Some("ada@x.com".into()),
            password: Some("pw123".into()),
            admin_artist: Some(admin_artist),
            owner_id: None,
        }
    }

    fn patch_request() -> PatchArtistRequest {
        PatchArtistRequest {
            first_name: Some("Augusta".into()),
            last_name: Some("King".into()),
            email: Some("augusta@x.com".into()),
            password: Some("engine".into()),
        }
    }

    #[tokio::test]
    async fn test_list_empty() {
        let service = ArtistService::new(test_db().await);

        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let service = ArtistService::new(test_db().await);

        let created = service.create(ada(true)).await.unwrap();
        let fetched = service.get(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.first_name, "Ada");
        assert_eq!(fetched.last_name, "Lovelace");
        assert_eq!(fetched.email, "ada@x.com");
        assert_eq!(fetched.password, "pw123");
        assert!(fetched.admin_artist);
    }

    #[tokio::test]
    async fn test_created_ids_are_unique() {
        let service = ArtistService::new(test_db().await);

        let mut ids = Vec::new();
        for _ in 0..5 {
            ids.push(service.create(ada(false)).await.unwrap().id);
        }
        let distinct: HashSet<i64> = ids.iter().copied().collect();

        assert_eq!(distinct.len(), ids.len());
        assert_eq!(service.list().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_create_missing_field_is_validation_error() {
        let service = ArtistService::new(test_db().await);

        let mut request = ada(true);
        request.admin_artist = None;
        assert!(matches!(
            service.create(request).await,
            Err(ServiceError::Validation(_))
        ));

        let mut request = ada(true);
        request.email = Some(String::new());
        assert!(matches!(
            service.create(request).await,
            Err(ServiceError::Validation(_))
        ));

        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_with_owner() {
        let db = test_db().await;
        let owner = db
            .insert_owner(NewOwner {
                first_name: "Grace".into(),
                last_name: "Hopper".into(),
                email: "grace@x.com".into(),
                password: "cobol".into(),
                king: true,
            })
            .await
            .unwrap();
        let service = ArtistService::new(db.clone());

        let mut request = ada(false);
        request.owner_id = Some(owner.id);
        let created = service.create(request).await.unwrap();

        let stored = db.get_artist(created.id).await.unwrap().unwrap();
        assert_eq!(stored.owner_id, Some(owner.id));
    }

    #[tokio::test]
    async fn test_create_with_missing_owner_is_constraint_violation() {
        let service = ArtistService::new(test_db().await);

        let mut request = ada(false);
        request.owner_id = Some(404);

        assert!(matches!(
            service.create(request).await,
            Err(ServiceError::ConstraintViolation(_))
        ));
    }

    #[tokio::test]
    async fn test_patch_updates_fields_and_keeps_id() {
        let service = ArtistService::new(test_db().await);
        let created = service.create(ada(true)).await.unwrap();

        let patched = service.patch(created.id, patch_request()).await.unwrap();
        let fetched = service.get(created.id).await.unwrap();

        assert_eq!(patched, fetched);
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.first_name, "Augusta");
        assert_eq!(fetched.last_name, "King");
        assert_eq!(fetched.email, "augusta@x.com");
        assert_eq!(fetched.password, "engine");
        assert!(fetched.admin_artist);
    }

    #[tokio::test]
    async fn test_patch_requires_all_fields() {
        let service = ArtistService::new(test_db().await);
        let created = service.create(ada(true)).await.unwrap();

        let mut request = patch_request();
        request.password = None;

        assert!(matches!(
            service.patch(created.id, request).await,
            Err(ServiceError::Validation(_))
        ));
        assert_eq!(service.get(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_patch_missing_artist() {
        let service = ArtistService::new(test_db().await);

        assert!(matches!(
            service.patch(9999, patch_request()).await,
            Err(ServiceError::NotFound { id: 9999, .. })
        ));
    }

    #[tokio::test]
    async fn test_admin_deletes_artist() {
        let service = ArtistService::new(test_db().await);
        let admin = service.create(ada(true)).await.unwrap();
        let target = service.create(ada(false)).await.unwrap();

        let message = service
            .delete(target.id, Some(&admin.id.to_string()))
            .await
            .unwrap();

        assert_eq!(message, format!("Artist {} removed", target.id));
        assert!(matches!(
            service.get(target.id).await,
            Err(ServiceError::NotFound { .. })
        ));
        assert_eq!(service.list().await.unwrap(), vec![admin]);
    }

    #[tokio::test]
    async fn test_non_admin_delete_is_forbidden() {
        let service = ArtistService::new(test_db().await);
        let actor = service.create(ada(false)).await.unwrap();
        let target = service.create(ada(false)).await.unwrap();

        assert!(matches!(
            service.delete(target.id, Some(&actor.id.to_string())).await,
            Err(ServiceError::Forbidden(_))
        ));
        assert!(matches!(
            service.delete(target.id, None).await,
            Err(ServiceError::Forbidden(_))
        ));
        assert!(matches!(
            service.delete(target.id, Some("12345")).await,
            Err(ServiceError::Forbidden(_))
        ));
        assert_eq!(service.get(target.id).await.unwrap(), target);
    }

    #[tokio::test]
    async fn test_delete_missing_artist_is_not_found() {
        let service = ArtistService::new(test_db().await);
        let admin = service.create(ada(true)).await.unwrap();

        assert!(matches!(
            service.delete(9999, Some(&admin.id.to_string())).await,
            Err(ServiceError::NotFound { id: 9999, .. })
        ));
    }

    #[test]
    fn test_parse_actor_id() {
        assert_eq!(parse_actor_id(None).unwrap(), None);
        assert_eq!(parse_actor_id(Some(" 12 ")).unwrap(), Some(12));
        assert!(matches!(
            parse_actor_id(Some("admin")),
            Err(ServiceError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_artist_ignores_actor() {
        let service = ArtistService::new(test_db().await);

        for actor in [None, Some("abc"), Some("42")] {
            assert!(matches!(
                service.delete(9999, actor).await,
                Err(ServiceError::NotFound { id: 9999, .. })
            ));
        }
    }

    #[tokio::test]
    async fn test_delete_with_malformed_actor_keeps_artist() {
        let service = ArtistService::new(test_db().await);
        let target = service.create(ada(false)).await.unwrap();

        assert!(matches!(
            service.delete(target.id, Some("abc")).await,
            Err(ServiceError::Validation(_))
        ));
        assert_eq!(service.get(target.id).await.unwrap(), target);
    }

    #[tokio::test]
    async fn test_delete_removes_content() {
        let db = test_db().await;
        let service = ArtistService::new(db.clone());
        let admin = service.create(ada(true)).await.unwrap();
        let target = service.create(ada(false)).await.unwrap();
        db.insert_artist_content(NewArtistContent {
            artist_id: target.id,
            cover_image: "/covers/ada.png".into(),
            artist_name: "Ada".into(),
            bio: "Notes on the engine".into(),
        })
        .await
        .unwrap();

        service
            .delete(target.id, Some(&admin.id.to_string()))
            .await
            .unwrap();

        assert!(db.list_artist_contents(target.id).await.unwrap().is_empty());
    }
}
