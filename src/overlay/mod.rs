//! Overlay value objects
//!
//! Every overlay serializes into the option object the Maps JavaScript API
//! takes for the matching `google.maps.*` constructor.

pub mod marker;
pub mod marker_icon;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Marker,
    MarkerIcon,
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectType::Marker => write!(f, "marker"),
            ObjectType::MarkerIcon => write!(f, "marker_icon"),
        }
    }
}

/// Common surface of everything that ends up in map-initialization code.
pub trait MapObject {
    fn object_type(&self) -> ObjectType;

    /// Option object for the front end.
    fn options(&self) -> serde_json::Value;

    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.options())?)
    }

    fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.options())?)
    }
}
