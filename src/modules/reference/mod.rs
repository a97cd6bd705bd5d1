pub mod data;
pub mod handlers;
pub mod routes;

pub use routes::reference_routes;
