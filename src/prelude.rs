//! Prelude module for common gmap-overlay types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use gmap_overlay::prelude::*;`

pub use crate::core::{
    coerce::PixelValue,
    config::ResolverConfig,
    geo::{LatLng, Point, Size},
};

pub use crate::overlay::{
    marker::Marker,
    marker_icon::{IconDescriptor, IconOptions, MarkerIcon},
    MapObject, ObjectType,
};

pub use crate::resolver::{
    default_resolver, DefaultResolver, FileResolver, ImageDimensions, ImageMetadataResolver,
    StaticResolver,
};

#[cfg(feature = "http")]
pub use crate::resolver::HttpResolver;

pub use crate::{Error as MapError, Result};
