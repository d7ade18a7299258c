pub mod middleware;

pub use middleware::auth_api_middleware;
