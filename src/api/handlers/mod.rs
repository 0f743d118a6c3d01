//! HTTP request handlers.

pub mod item_handler;
pub mod upload_handler;

pub use item_handler::item_routes;
pub use upload_handler::upload_routes;
