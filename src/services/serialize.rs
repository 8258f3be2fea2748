//! Public JSON shapes for stored records.
//!
//! Each view lists exactly the fields a client may see. Timestamps, the
//! artist's `owner_id` and child collections stay private.

use serde::{Deserialize, Serialize};

use crate::entities;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerView {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub king: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistView {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub admin_artist: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistContentView {
    pub id: i64,
    pub cover_image: String,
    pub artist_name: String,
    pub bio: String,
    pub artist_id: i64,
}

/// A stored record with a public representation.
pub trait PublicSchema {
    type View: Serialize;

    fn to_view(&self) -> Self::View;
}

impl PublicSchema for entities::owner::Model {
    type View = OwnerView;

    fn to_view(&self) -> OwnerView {
        OwnerView {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            king: self.king,
        }
    }
}

impl PublicSchema for entities::artist::Model {
    type View = ArtistView;

    fn to_view(&self) -> ArtistView {
        ArtistView {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            admin_artist: self.admin_artist,
        }
    }
}

impl PublicSchema for entities::artist_content::Model {
    type View = ArtistContentView;

    fn to_view(&self) -> ArtistContentView {
        ArtistContentView {
            id: self.id,
            cover_image: self.cover_image.clone(),
            artist_name: self.artist_name.clone(),
            bio: self.bio.clone(),
            artist_id: self.artist_id,
        }
    }
}

pub fn one<M: PublicSchema>(model: &M) -> M::View {
    model.to_view()
}

/// Serializes a collection, keeping its order.
pub fn many<M: PublicSchema>(models: &[M]) -> Vec<M::View> {
    models.iter().map(PublicSchema::to_view).collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::Value;

    use super::*;

    fn artist(id: i64) -> entities::artist::Model {
        entities::artist::Model {
            id,
            first_name: format!("First{id}"),
            last_name: "Last".into(),
            email: format!("artist{id}@x.com"),
            password: "pw".into(),
            admin_artist: id % 2 == 0,
            owner_id: Some(1),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn keys(value: &Value) -> Vec<String> {
        let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }

    #[test]
    fn test_artist_collection_exposes_only_public_fields() {
        let artists: Vec<_> = (1..=4).map(artist).collect();

        let json = serde_json::to_value(many(&artists)).unwrap();
        let items = json.as_array().unwrap();

        assert_eq!(items.len(), 4);
        for (item, id) in items.iter().zip(1i64..) {
            assert_eq!(
                keys(item),
                vec![
                    "admin_artist",
                    "email",
                    "first_name",
                    "id",
                    "last_name",
                    "password"
                ]
            );
            assert_eq!(item["id"], id);
        }
    }

    #[test]
    fn test_empty_collection() {
        let json = serde_json::to_value(many::<entities::artist::Model>(&[])).unwrap();
        assert_eq!(json, Value::Array(vec![]));
    }

    #[test]
    fn test_owner_and_content_fields() {
        let owner = entities::owner::Model {
            id: 3,
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: "grace@x.com".into(),
            password: "cobol".into(),
            king: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(one(&owner)).unwrap();
        assert_eq!(
            keys(&json),
            vec!["email", "first_name", "id", "king", "last_name", "password"]
        );
        assert_eq!(json["king"], true);

        let content = entities::artist_content::Model {
            id: 9,
            cover_image: "/img/cover.png".into(),
            artist_name: "Hopper".into(),
            bio: "Bugs".into(),
            artist_id: 3,
        };
        let json = serde_json::to_value(one(&content)).unwrap();
        assert_eq!(
            keys(&json),
            vec!["artist_id", "artist_name", "bio", "cover_image", "id"]
        );
    }
}
