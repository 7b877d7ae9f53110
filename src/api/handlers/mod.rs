//! HTTP request handlers for API endpoints.

pub mod destinations;
pub mod health;

pub use destinations::{destination_handler, destination_list_handler};
pub use health::health_handler;
