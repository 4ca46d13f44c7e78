//! # gmap-overlay
//!
//! Server-side value objects for Google Maps JavaScript-API entities.
//!
//! Markers and marker icons are modelled as plain Rust values that serialize
//! into the option objects the Maps front end expects. Marker icons probe
//! their image at construction time to derive a default size, anchor and
//! sprite origin.

pub mod core;
pub mod overlay;
pub mod prelude;
pub mod resolver;

// Re-export public API
pub use crate::core::{
    config::ResolverConfig,
    geo::{LatLng, Point, Size},
};

pub use overlay::{
    marker::Marker,
    marker_icon::{IconDescriptor, IconOptions, MarkerIcon},
    MapObject, ObjectType,
};

pub use resolver::{
    DefaultResolver, FileResolver, ImageDimensions, ImageMetadataResolver, StaticResolver,
};

#[cfg(feature = "http")]
pub use resolver::HttpResolver;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("unable to load MarkerIcon: {source_url} ({reason})")]
    InvalidResource { source_url: String, reason: String },

    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[cfg(feature = "http")]
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} while fetching {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MapError {
    /// Builds an [`MapError::InvalidResource`] for `source`.
    pub fn invalid_resource(source: &str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidResource {
            source_url: source.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_invalid_resource(&self) -> bool {
        matches!(self, Self::InvalidResource { .. })
    }
}

/// Error type alias for convenience
pub type Error = MapError;
