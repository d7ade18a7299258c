use crate::pagination::Keyed;
use crate::photo::Photo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Photos grouped by travel destination, unique on `(country, city)` ignoring case.
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitySet {
    pub id: Uuid,
    pub country: String,
    pub country_code: Option<String>,
    pub city: String,
    pub cover_photo_id: Option<Uuid>,
    pub photo_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Keyed for CitySet {
    fn id(&self) -> Uuid {
        self.id
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitySetWithPhotos {
    #[serde(flatten)]
    pub city_set: CitySet,
    pub cover_photo: Option<Photo>,
    pub photos: Vec<Photo>,
}

impl CitySetWithPhotos {
    /// Attaches member photos, picking the cover out of them.
    pub fn new(city_set: CitySet, photos: Vec<Photo>) -> Self {
        let cover_photo = city_set
            .cover_photo_id
            .and_then(|cover_id| photos.iter().find(|p| p.id == cover_id).cloned());

        CitySetWithPhotos {
            city_set,
            cover_photo,
            photos,
        }
    }
}

impl Keyed for CitySetWithPhotos {
    fn id(&self) -> Uuid {
        self.city_set.id
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.city_set.updated_at
    }
}
