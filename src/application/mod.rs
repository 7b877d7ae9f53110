//! Application layer services.
//!
//! Services consume repository traits and provide a small API for HTTP
//! handlers and the admin CLI.
//!
//! - [`services::destination_service::DestinationService`] - Destination listing and lookup

pub mod services;
