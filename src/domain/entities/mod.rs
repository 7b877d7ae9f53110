//! Core domain entities representing the data model.
//!
//! Entities are plain data structures without business logic. The only
//! entity is [`Destination`]; [`DestinationSummary`] is its list projection.

pub mod destination;

pub use destination::{Destination, DestinationSummary};
