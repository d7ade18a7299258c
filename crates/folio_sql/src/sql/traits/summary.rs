use crate::sql::error::SqlError;
use crate::sql::query::Queries;

use async_trait::async_trait;
use folio_types::{fill_yearly_stats, DashboardSummary, TopCity, SUMMARY_YEARS, TOP_CITY_COUNT};
use sqlx::{Pool, Postgres};
use std::result::Result::Ok;

#[async_trait]
pub trait SummarySqlLogic {
    /// Dashboard counters for the five years ending at `current_year`.
    async fn get_dashboard_summary(
        pool: &Pool<Postgres>,
        current_year: i32,
    ) -> Result<DashboardSummary, SqlError> {
        let photo_count: i64 = sqlx::query_scalar(&Queries::CountPhotos.get_query().sql)
            .fetch_one(pool)
            .await?;

        let city_count: i64 = sqlx::query_scalar(&Queries::CountCitySets.get_query().sql)
            .fetch_one(pool)
            .await?;

        let yearly: Vec<(i32, i64)> = sqlx::query_as(&Queries::YearlyPhotoStats.get_query().sql)
            .bind(current_year - (SUMMARY_YEARS - 1))
            .bind(current_year)
            .fetch_all(pool)
            .await?;

        let top_cities: Vec<TopCity> = sqlx::query_as(&Queries::TopCities.get_query().sql)
            .bind(TOP_CITY_COUNT)
            .fetch_all(pool)
            .await?;

        Ok(DashboardSummary {
            photo_count,
            city_count,
            yearly_stats: fill_yearly_stats(current_year, &yearly),
            top_cities,
        })
    }
}
