use crate::sql::error::SqlError;
use crate::sql::pagination::{fetch_page, Filter};
use crate::sql::query::Queries;

use async_trait::async_trait;
use folio_types::{
    CitySet, CreatePhotoRequest, MapPhoto, PageRequest, PageResult, Photo, UpdatePhotoRequest,
};
use sqlx::{Pool, Postgres};
use std::result::Result::Ok;
use tracing::{debug, instrument};
use uuid::Uuid;

#[async_trait]
pub trait PhotoSqlLogic {
    /// One page of photos in keyset order.
    async fn get_photos_page(
        pool: &Pool<Postgres>,
        request: &PageRequest,
    ) -> Result<PageResult<Photo>, SqlError> {
        fetch_page::<Photo>(pool, &Filter::new(), request).await
    }

    /// Every photo by capture date, newest first, capped at `max_rows`.
    async fn get_all_photos(pool: &Pool<Postgres>, max_rows: i64) -> Result<Vec<Photo>, SqlError> {
        let query = Queries::GetAllPhotos.get_query();

        let photos = sqlx::query_as::<_, Photo>(&query.sql)
            .bind(max_rows)
            .fetch_all(pool)
            .await?;

        Ok(photos)
    }

    async fn get_photo(pool: &Pool<Postgres>, id: &Uuid) -> Result<Option<Photo>, SqlError> {
        let query = Queries::GetPhoto.get_query();

        let photo: Option<Photo> = sqlx::query_as(&query.sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(photo)
    }

    /// Inserts a photo and files it under its city set.
    ///
    /// Both writes share one transaction: either the photo exists and the set's
    /// `photo_count` includes it, or neither change is visible.
    #[instrument(skip_all)]
    async fn insert_photo(
        pool: &Pool<Postgres>,
        request: &CreatePhotoRequest,
    ) -> Result<Photo, SqlError> {
        let mut tx = pool.begin().await?;

        let query = Queries::InsertPhoto.get_query();
        let photo: Photo = sqlx::query_as(&query.sql)
            .bind(Uuid::now_v7())
            .bind(&request.url)
            .bind(&request.title)
            .bind(&request.description)
            .bind(&request.blur_data)
            .bind(request.aspect_ratio)
            .bind(request.width)
            .bind(request.height)
            .bind(&request.make)
            .bind(&request.model)
            .bind(&request.lens_model)
            .bind(request.focal_length)
            .bind(request.f_number)
            .bind(request.iso)
            .bind(request.exposure_time)
            .bind(request.date_time_original)
            .bind(request.latitude)
            .bind(request.longitude)
            .bind(&request.country)
            .bind(&request.country_code)
            .bind(&request.region)
            .bind(&request.city)
            .bind(request.is_favorite)
            .fetch_one(&mut *tx)
            .await?;

        let (Some(country), Some(city)) = (request.country.as_deref(), request.city_set_name())
        else {
            tx.commit().await?;
            return Ok(photo);
        };

        let query = Queries::UpsertCitySet.get_query();
        let city_set: CitySet = sqlx::query_as(&query.sql)
            .bind(Uuid::now_v7())
            .bind(country.trim())
            .bind(&request.country_code)
            .bind(city)
            .bind(photo.id)
            .fetch_one(&mut *tx)
            .await?;

        let query = Queries::SetPhotoCitySet.get_query();
        let photo: Photo = sqlx::query_as(&query.sql)
            .bind(photo.id)
            .bind(city_set.id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(
            photo_id = %photo.id,
            city_set_id = %city_set.id,
            photo_count = city_set.photo_count,
            "Filed photo under city set"
        );

        Ok(photo)
    }

    /// Applies the fields present in `request`. `None` when the photo does not exist.
    async fn update_photo(
        pool: &Pool<Postgres>,
        id: &Uuid,
        request: &UpdatePhotoRequest,
    ) -> Result<Option<Photo>, SqlError> {
        let query = Queries::UpdatePhoto.get_query();

        let photo: Option<Photo> = sqlx::query_as(&query.sql)
            .bind(id)
            .bind(&request.title)
            .bind(&request.description)
            .bind(request.is_favorite)
            .bind(request.latitude)
            .bind(request.longitude)
            .bind(&request.country)
            .bind(&request.country_code)
            .bind(&request.region)
            .bind(&request.city)
            .fetch_optional(pool)
            .await?;

        Ok(photo)
    }

    async fn get_map_photos(pool: &Pool<Postgres>) -> Result<Vec<MapPhoto>, SqlError> {
        let query = Queries::GetMapPhotos.get_query();

        let markers = sqlx::query_as::<_, MapPhoto>(&query.sql)
            .fetch_all(pool)
            .await?;

        Ok(markers)
    }
}
