//! HTTP clients for the third-party services the venue backend talks to.
//!
//! Each service sits behind a small async trait so the API layer can hold
//! a trait object and tests can substitute a fake.

pub mod error;
pub mod graph;
pub mod maps;

pub use error::IntegrationError;
pub use graph::{GraphClient, MediaItem, MediaSource};
pub use maps::{DistanceLookup, GoogleMapsClient};
