use color_eyre::{Result, eyre::Context};
use migration::MigratorTrait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectOptions, ConnectionTrait,
    Database as SeaDatabase, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use std::path::Path;
use std::time::Duration;

use crate::entities;
use crate::error::{ServiceError, ServiceResult};

pub struct Database {
    conn: DatabaseConnection,
}

#[derive(Debug, Clone)]
pub struct NewOwner {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub king: bool,
}

#[derive(Debug, Clone)]
pub struct NewArtist {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub admin_artist: bool,
    pub owner_id: Option<i64>,
}

/// The identity fields replaced by an artist patch.
#[derive(Debug, Clone)]
pub struct ArtistIdentity {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct NewArtistContent {
    pub artist_id: i64,
    pub cover_image: String,
    pub artist_name: String,
    pub bio: String,
}

/// Turns a configured database target into a sea-orm connection URL.
/// Anything already carrying the `sqlite:` scheme is used verbatim, everything
/// else is treated as a file path which is created if missing.
pub fn connection_url(target: &str) -> String {
    if target.starts_with("sqlite:") {
        target.to_string()
    } else {
        format!("sqlite://{}?mode=rwc", target)
    }
}

impl Database {
    /// Open or create the database behind `target` and bring the schema up to date.
    pub async fn open(target: &str) -> Result<Self> {
        log::debug!("Opening database at: {}", target);

        if !target.starts_with("sqlite:") {
            if let Some(parent) = Path::new(target).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).context(format!(
                        "Failed to create database directory: {}",
                        parent.display()
                    ))?;
                }
            }
        }

        let mut opt = ConnectOptions::new(connection_url(target));
        opt.max_connections(10)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(8))
            .acquire_timeout(Duration::from_secs(8))
            .idle_timeout(Duration::from_secs(60))
            .sqlx_logging(false);

        let conn = SeaDatabase::connect(opt)
            .await
            .context(format!("Failed to open database: {}", target))?;

        Self::prepare(conn).await
    }

    /// Enable foreign keys and run migrations on an already established connection.
    pub async fn prepare(conn: DatabaseConnection) -> Result<Self> {
        conn.execute_unprepared("PRAGMA foreign_keys = ON")
            .await
            .context("Failed to enable foreign keys")?;

        log::debug!("Running database migrations");
        migration::Migrator::up(&conn, None)
            .await
            .context("Failed to run database migrations")?;

        log::info!("Database ready");
        Ok(Database { conn })
    }

    // ========== Owner Methods ==========

    pub async fn insert_owner(&self, owner: NewOwner) -> ServiceResult<entities::owner::Model> {
        let model = entities::owner::ActiveModel {
            first_name: ActiveValue::Set(owner.first_name),
            last_name: ActiveValue::Set(owner.last_name),
            email: ActiveValue::Set(owner.email),
            password: ActiveValue::Set(owner.password),
            king: ActiveValue::Set(owner.king),
            ..Default::default()
        }
        .insert(&self.conn)
        .await?;

        log::info!("Owner created: '{}' (ID: {})", model.email, model.id);
        Ok(model)
    }

    pub async fn get_owner(&self, id: i64) -> ServiceResult<Option<entities::owner::Model>> {
        Ok(entities::owner::Entity::find_by_id(id)
            .one(&self.conn)
            .await?)
    }

    pub async fn list_owners(&self) -> ServiceResult<Vec<entities::owner::Model>> {
        Ok(entities::owner::Entity::find()
            .order_by_asc(entities::owner::Column::Id)
            .all(&self.conn)
            .await?)
    }

    // ========== Artist Methods ==========

    pub async fn insert_artist(&self, artist: NewArtist) -> ServiceResult<entities::artist::Model> {
        let model = entities::artist::ActiveModel {
            first_name: ActiveValue::Set(artist.first_name),
            last_name: ActiveValue::Set(artist.last_name),
            email: ActiveValue::Set(artist.email),
            password: ActiveValue::Set(artist.password),
            admin_artist: ActiveValue::Set(artist.admin_artist),
            owner_id: ActiveValue::Set(artist.owner_id),
            ..Default::default()
        }
        .insert(&self.conn)
        .await?;

        log::info!("Artist created: '{}' (ID: {})", model.email, model.id);
        Ok(model)
    }

    pub async fn get_artist(&self, id: i64) -> ServiceResult<Option<entities::artist::Model>> {
        Ok(entities::artist::Entity::find_by_id(id)
            .one(&self.conn)
            .await?)
    }

    pub async fn list_artists(&self) -> ServiceResult<Vec<entities::artist::Model>> {
        Ok(entities::artist::Entity::find()
            .order_by_asc(entities::artist::Column::Id)
            .all(&self.conn)
            .await?)
    }

    pub async fn update_artist(
        &self,
        id: i64,
        identity: ArtistIdentity,
    ) -> ServiceResult<entities::artist::Model> {
        let artist = self
            .get_artist(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Artist", id))?;

        let mut active_artist: entities::artist::ActiveModel = artist.into();
        active_artist.first_name = ActiveValue::Set(identity.first_name);
        active_artist.last_name = ActiveValue::Set(identity.last_name);
        active_artist.email = ActiveValue::Set(identity.email);
        active_artist.password = ActiveValue::Set(identity.password);
        let model = active_artist.update(&self.conn).await?;

        log::info!("Artist updated: '{}' (ID: {})", model.email, id);
        Ok(model)
    }

    /// Hard delete. Content rows go with the artist through the foreign key cascade.
    pub async fn delete_artist(&self, id: i64) -> ServiceResult<()> {
        let result = entities::artist::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("Artist", id));
        }

        log::info!("Artist deleted (ID: {})", id);
        Ok(())
    }

    // ========== Artist Content Methods ==========

    pub async fn insert_artist_content(
        &self,
        content: NewArtistContent,
    ) -> ServiceResult<entities::artist_content::Model> {
        let model = entities::artist_content::ActiveModel {
            artist_id: ActiveValue::Set(content.artist_id),
            cover_image: ActiveValue::Set(content.cover_image),
            artist_name: ActiveValue::Set(content.artist_name),
            bio: ActiveValue::Set(content.bio),
            ..Default::default()
        }
        .insert(&self.conn)
        .await?;

        log::info!(
            "Artist content created: '{}' (ID: {}, artist ID: {})",
            model.artist_name,
            model.id,
            model.artist_id
        );
        Ok(model)
    }

    pub async fn list_artist_contents(
        &self,
        artist_id: i64,
    ) -> ServiceResult<Vec<entities::artist_content::Model>> {
        Ok(entities::artist_content::Entity::find()
            .filter(entities::artist_content::Column::ArtistId.eq(artist_id))
            .order_by_asc(entities::artist_content::Column::Id)
            .all(&self.conn)
            .await?)
    }
}
