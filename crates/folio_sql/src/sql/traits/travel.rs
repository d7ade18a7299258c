use crate::sql::error::SqlError;
use crate::sql::pagination::{fetch_page, Filter};
use crate::sql::query::Queries;

use async_trait::async_trait;
use folio_types::{CitySet, CitySetWithPhotos, PageRequest, PageResult, Photo};
use itertools::Itertools;
use sqlx::{Pool, Postgres};
use std::collections::HashMap;
use std::result::Result::Ok;
use uuid::Uuid;

#[async_trait]
pub trait CitySetSqlLogic {
    /// Member photos of the given sets, keyed by set id.
    async fn get_city_set_photos(
        pool: &Pool<Postgres>,
        city_set_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<Photo>>, SqlError> {
        if city_set_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let query = Queries::GetCitySetPhotos.get_query();

        let photos = sqlx::query_as::<_, Photo>(&query.sql)
            .bind(city_set_ids)
            .fetch_all(pool)
            .await?;

        let grouped = photos
            .into_iter()
            .filter_map(|photo| photo.city_set_id.map(|id| (id, photo)))
            .into_group_map();

        Ok(grouped)
    }

    /// Loads photos for each set, keeping the sets' order.
    async fn attach_photos(
        pool: &Pool<Postgres>,
        city_sets: Vec<CitySet>,
    ) -> Result<Vec<CitySetWithPhotos>, SqlError> {
        let ids = city_sets.iter().map(|set| set.id).collect::<Vec<_>>();
        let mut photos = Self::get_city_set_photos(pool, &ids).await?;

        let sets = city_sets
            .into_iter()
            .map(|set| {
                let members = photos.remove(&set.id).unwrap_or_default();
                CitySetWithPhotos::new(set, members)
            })
            .collect();

        Ok(sets)
    }

    async fn get_city_sets_page(
        pool: &Pool<Postgres>,
        request: &PageRequest,
    ) -> Result<PageResult<CitySetWithPhotos>, SqlError> {
        let mut page = fetch_page::<CitySet>(pool, &Filter::new(), request).await?;
        let city_sets = std::mem::take(&mut page.items);
        let items = Self::attach_photos(pool, city_sets).await?;

        Ok(page.with_items(items))
    }

    /// Most recently created set.
    async fn get_latest_city_set(
        pool: &Pool<Postgres>,
    ) -> Result<Option<CitySetWithPhotos>, SqlError> {
        let query = Queries::GetLatestCitySet.get_query();

        let city_set: Option<CitySet> = sqlx::query_as(&query.sql).fetch_optional(pool).await?;

        match city_set {
            Some(set) => Ok(Self::attach_photos(pool, vec![set]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Case-insensitive lookup by city name.
    async fn get_city_set_by_city(
        pool: &Pool<Postgres>,
        city: &str,
    ) -> Result<Option<CitySetWithPhotos>, SqlError> {
        let query = Queries::GetCitySetByCity.get_query();

        let city_set: Option<CitySet> = sqlx::query_as(&query.sql)
            .bind(city.trim())
            .fetch_optional(pool)
            .await?;

        match city_set {
            Some(set) => Ok(Self::attach_photos(pool, vec![set]).await?.pop()),
            None => Ok(None),
        }
    }
}
