//constants

const GET_ALL_PHOTOS: &str = include_str!("scripts/get_all_photos.sql");
const GET_PHOTO: &str = include_str!("scripts/get_photo.sql");
const INSERT_PHOTO: &str = include_str!("scripts/insert_photo.sql");
const SET_PHOTO_CITY_SET: &str = include_str!("scripts/set_photo_city_set.sql");
const UPDATE_PHOTO: &str = include_str!("scripts/update_photo.sql");
const GET_MAP_PHOTOS: &str = include_str!("scripts/get_map_photos.sql");
const UPSERT_CITY_SET: &str = include_str!("scripts/upsert_city_set.sql");
const GET_LATEST_CITY_SET: &str = include_str!("scripts/get_latest_city_set.sql");
const GET_CITY_SET_BY_CITY: &str = include_str!("scripts/get_city_set_by_city.sql");
const GET_CITY_SET_PHOTOS: &str = include_str!("scripts/get_city_set_photos.sql");
const INSERT_POST: &str = include_str!("scripts/insert_post.sql");
const GET_POST: &str = include_str!("scripts/get_post.sql");
const UPDATE_POST: &str = include_str!("scripts/update_post.sql");
const DELETE_POST: &str = include_str!("scripts/delete_post.sql");
const GET_LATEST_PUBLIC_POST: &str = include_str!("scripts/get_latest_public_post.sql");
const GET_PUBLIC_POST_BY_SLUG: &str = include_str!("scripts/get_public_post_by_slug.sql");
const COUNT_PHOTOS: &str = include_str!("scripts/count_photos.sql");
const COUNT_CITY_SETS: &str = include_str!("scripts/count_city_sets.sql");
const YEARLY_PHOTO_STATS: &str = include_str!("scripts/yearly_photo_stats.sql");
const TOP_CITIES: &str = include_str!("scripts/top_cities.sql");

pub enum Queries {
    GetAllPhotos,
    GetPhoto,
    InsertPhoto,
    SetPhotoCitySet,
    UpdatePhoto,
    GetMapPhotos,
    UpsertCitySet,
    GetLatestCitySet,
    GetCitySetByCity,
    GetCitySetPhotos,
    InsertPost,
    GetPost,
    UpdatePost,
    DeletePost,
    GetLatestPublicPost,
    GetPublicPostBySlug,
    CountPhotos,
    CountCitySets,
    YearlyPhotoStats,
    TopCities,
}

impl Queries {
    pub fn get_query(&self) -> SqlQuery {
        match self {
            // load sql file from scripts/*.sql
            Queries::GetAllPhotos => SqlQuery::new(GET_ALL_PHOTOS),
            Queries::GetPhoto => SqlQuery::new(GET_PHOTO),
            Queries::InsertPhoto => SqlQuery::new(INSERT_PHOTO),
            Queries::SetPhotoCitySet => SqlQuery::new(SET_PHOTO_CITY_SET),
            Queries::UpdatePhoto => SqlQuery::new(UPDATE_PHOTO),
            Queries::GetMapPhotos => SqlQuery::new(GET_MAP_PHOTOS),
            Queries::UpsertCitySet => SqlQuery::new(UPSERT_CITY_SET),
            Queries::GetLatestCitySet => SqlQuery::new(GET_LATEST_CITY_SET),
            Queries::GetCitySetByCity => SqlQuery::new(GET_CITY_SET_BY_CITY),
            Queries::GetCitySetPhotos => SqlQuery::new(GET_CITY_SET_PHOTOS),
            Queries::InsertPost => SqlQuery::new(INSERT_POST),
            Queries::GetPost => SqlQuery::new(GET_POST),
            Queries::UpdatePost => SqlQuery::new(UPDATE_POST),
            Queries::DeletePost => SqlQuery::new(DELETE_POST),
            Queries::GetLatestPublicPost => SqlQuery::new(GET_LATEST_PUBLIC_POST),
            Queries::GetPublicPostBySlug => SqlQuery::new(GET_PUBLIC_POST_BY_SLUG),
            Queries::CountPhotos => SqlQuery::new(COUNT_PHOTOS),
            Queries::CountCitySets => SqlQuery::new(COUNT_CITY_SETS),
            Queries::YearlyPhotoStats => SqlQuery::new(YEARLY_PHOTO_STATS),
            Queries::TopCities => SqlQuery::new(TOP_CITIES),
        }
    }
}

pub struct SqlQuery {
    pub sql: String,
}

impl SqlQuery {
    fn new(sql: &str) -> Self {
        Self {
            sql: sql.to_string(),
        }
    }
}
