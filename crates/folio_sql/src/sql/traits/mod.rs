pub mod photo;
pub mod post;
pub mod summary;
pub mod travel;

pub use photo::PhotoSqlLogic;
pub use post::PostSqlLogic;
pub use summary::SummarySqlLogic;
pub use travel::CitySetSqlLogic;
