pub mod contracts;
pub mod error;
pub mod pagination;
pub mod photo;
pub mod post;
pub mod summary;
pub mod travel;
pub mod util;

pub use contracts::*;
pub use error::TypeError;
pub use pagination::*;
pub use photo::*;
pub use post::*;
pub use summary::*;
pub use travel::*;
