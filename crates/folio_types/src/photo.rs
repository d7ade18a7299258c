use crate::error::TypeError;
use crate::pagination::Keyed;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Countries whose photos are grouped by region rather than by city.
const REGION_GROUPED_COUNTRIES: [&str; 2] = ["JP", "TW"];

#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: Uuid,
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub blur_data: Option<String>,
    pub aspect_ratio: f64,
    pub width: i32,
    pub height: i32,
    pub make: Option<String>,
    pub model: Option<String>,
    pub lens_model: Option<String>,
    pub focal_length: Option<f64>,
    pub f_number: Option<f64>,
    pub iso: Option<i32>,
    pub exposure_time: Option<f64>,
    pub date_time_original: Option<DateTime<Utc>>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub is_favorite: bool,
    pub city_set_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Keyed for Photo {
    fn id(&self) -> Uuid {
        self.id
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePhotoRequest {
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub blur_data: Option<String>,
    pub aspect_ratio: f64,
    pub width: i32,
    pub height: i32,
    pub make: Option<String>,
    pub model: Option<String>,
    pub lens_model: Option<String>,
    pub focal_length: Option<f64>,
    pub f_number: Option<f64>,
    pub iso: Option<i32>,
    pub exposure_time: Option<f64>,
    pub date_time_original: Option<DateTime<Utc>>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl CreatePhotoRequest {
    pub fn validate(&self) -> Result<(), TypeError> {
        if self.title.trim().is_empty() {
            return Err(TypeError::EmptyTitle);
        }

        if self.url.trim().is_empty() {
            return Err(TypeError::InvalidPhoto("url must not be empty".to_string()));
        }

        if self.width <= 0 || self.height <= 0 {
            return Err(TypeError::InvalidPhoto(format!(
                "dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }

        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return Err(TypeError::InvalidPhoto(format!(
                "aspect ratio must be positive, got {}",
                self.aspect_ratio
            )));
        }

        Ok(())
    }

    /// Name of the city set this photo is filed under.
    ///
    /// Japan and Taiwan group by region (prefecture / county), everything else
    /// by city. Returns `None` when the country or the name is missing.
    pub fn city_set_name(&self) -> Option<&str> {
        let country = self.country.as_deref().map(str::trim).unwrap_or_default();
        if country.is_empty() {
            return None;
        }

        let by_region = self
            .country_code
            .as_deref()
            .is_some_and(|code| REGION_GROUPED_COUNTRIES.contains(&code.trim()));

        let name = if by_region {
            self.region.as_deref()
        } else {
            self.city.as_deref()
        };

        name.map(str::trim).filter(|name| !name.is_empty())
    }
}

/// Partial photo update, absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePhotoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_favorite: Option<bool>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
}

/// Marker data for the discover map.
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapPhoto {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub blur_data: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}
