//! Marker icon descriptor
//!
//! A [`MarkerIcon`] is attached to a marker to replace the default pin. The
//! image is probed once at construction; its natural size drives the default
//! icon size, and the default anchor sits at the bottom-centre of the icon so
//! the tip of a pin image lands on the marker position.
//!
//! ```no_run
//! use gmap_overlay::{IconOptions, MarkerIcon};
//!
//! let mut icon = MarkerIcon::create("static/pin.png", None)?;
//! icon.set_size(30, 30).set_anchor(Some(15), Some(30));
//!
//! let shadow = MarkerIcon::create("static/shadow.png", IconOptions::new().with_anchor(0, 30))?;
//! # Ok::<(), gmap_overlay::MapError>(())
//! ```

use serde::{Deserialize, Serialize, Serializer};

use super::{MapObject, ObjectType};
use crate::core::coerce::{deserialize_opt_px, PixelValue};
use crate::core::constants::DEFAULT_ORIGIN;
use crate::core::geo::{Point, Size};
use crate::resolver::{default_resolver, ImageMetadataResolver};
use crate::{MapError, Result};

#[cfg(feature = "debug")]
use log;

/// Construction options for [`MarkerIcon`]. Unset fields fall back to values
/// derived from the image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IconOptions {
    #[serde(deserialize_with = "deserialize_opt_px")]
    pub width: Option<i32>,
    #[serde(deserialize_with = "deserialize_opt_px")]
    pub height: Option<i32>,
    #[serde(deserialize_with = "deserialize_opt_px")]
    pub anchor_x: Option<i32>,
    #[serde(deserialize_with = "deserialize_opt_px")]
    pub anchor_y: Option<i32>,
    #[serde(deserialize_with = "deserialize_opt_px")]
    pub origin_x: Option<i32>,
    #[serde(deserialize_with = "deserialize_opt_px")]
    pub origin_y: Option<i32>,
}

impl IconOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a loosely typed option bag such as `{"width": "30", "anchor_y": 30.0}`.
    ///
    /// Unknown keys are ignored and values are coerced to integers.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Err(MapError::InvalidOptions(format!(
                "expected an object, got {}",
                value
            )));
        }
        IconOptions::deserialize(value).map_err(|e| MapError::InvalidOptions(e.to_string()))
    }

    pub fn with_width(mut self, width: impl PixelValue) -> Self {
        self.width = Some(width.to_px());
        self
    }

    pub fn with_height(mut self, height: impl PixelValue) -> Self {
        self.height = Some(height.to_px());
        self
    }

    pub fn with_size(self, width: impl PixelValue, height: impl PixelValue) -> Self {
        self.with_width(width).with_height(height)
    }

    pub fn with_anchor(mut self, x: impl PixelValue, y: impl PixelValue) -> Self {
        self.anchor_x = Some(x.to_px());
        self.anchor_y = Some(y.to_px());
        self
    }

    pub fn with_origin(mut self, x: impl PixelValue, y: impl PixelValue) -> Self {
        self.origin_x = Some(x.to_px());
        self.origin_y = Some(y.to_px());
        self
    }

    /// Explicit size, only when both dimensions were given.
    fn explicit_size(&self) -> Option<Size> {
        match (self.width, self.height) {
            (Some(width), Some(height)) => Some(Size { width, height }),
            _ => None,
        }
    }
}

/// Serialized form of a [`MarkerIcon`], matching the shape of the
/// `google.maps.Icon` literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconDescriptor {
    pub url: String,
    pub size: Size,
    pub anchor: Point,
    pub origin: Point,
}

/// Custom marker image with its geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerIcon {
    source: String,
    size: Size,
    anchor: Point,
    origin: Point,
}

impl MarkerIcon {
    /// Creates an icon, probing `source` through the shared default resolver.
    pub fn create(
        source: impl Into<String>,
        options: impl Into<Option<IconOptions>>,
    ) -> Result<Self> {
        Self::create_with(default_resolver(), source, options)
    }

    /// Creates an icon, probing `source` through `resolver`.
    ///
    /// Fails with [`MapError::InvalidResource`] when the image dimensions
    /// cannot be determined.
    pub fn create_with<R: ImageMetadataResolver + ?Sized>(
        resolver: &R,
        source: impl Into<String>,
        options: impl Into<Option<IconOptions>>,
    ) -> Result<Self> {
        let source = source.into();
        let options = options.into().unwrap_or_default();

        if source.trim().is_empty() {
            return Err(MapError::invalid_resource(&source, "empty source"));
        }

        let natural = resolver.resolve(&source).map_err(|e| {
            #[cfg(feature = "debug")]
            log::warn!("Failed to resolve marker icon {}: {}", source, e);

            match e {
                MapError::InvalidResource { .. } => e,
                other => MapError::invalid_resource(&source, other),
            }
        })?;

        let size = options
            .explicit_size()
            .unwrap_or_else(|| Size::new(natural.width, natural.height));

        let default_anchor = size.bottom_center();
        let anchor = Point {
            x: options.anchor_x.unwrap_or(default_anchor.x),
            y: options.anchor_y.unwrap_or(default_anchor.y),
        };
        let origin = Point {
            x: options.origin_x.unwrap_or(DEFAULT_ORIGIN.0),
            y: options.origin_y.unwrap_or(DEFAULT_ORIGIN.1),
        };

        #[cfg(feature = "debug")]
        log::debug!(
            "Marker icon {} resolved to {}x{} (natural {}x{})",
            source,
            size.width,
            size.height,
            natural.width,
            natural.height
        );

        Ok(Self {
            source,
            size,
            anchor,
            origin,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn anchor_x(&self) -> i32 {
        self.anchor.x
    }

    pub fn anchor_y(&self) -> i32 {
        self.anchor.y
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn origin_x(&self) -> i32 {
        self.origin.x
    }

    pub fn origin_y(&self) -> i32 {
        self.origin.y
    }

    /// Sets the rendered width. The anchor is left where it is.
    pub fn set_width(&mut self, width: impl PixelValue) -> &mut Self {
        self.size.width = width.to_px();
        self
    }

    pub fn set_height(&mut self, height: impl PixelValue) -> &mut Self {
        self.size.height = height.to_px();
        self
    }

    pub fn set_size(&mut self, width: impl PixelValue, height: impl PixelValue) -> &mut Self {
        self.size = Size::new(width, height);
        self
    }

    /// Moves the point of the icon placed on the marker position.
    /// A `None` coordinate keeps its current value.
    pub fn set_anchor(&mut self, x: Option<i32>, y: Option<i32>) -> &mut Self {
        if let Some(x) = x {
            self.anchor.x = x;
        }
        if let Some(y) = y {
            self.anchor.y = y;
        }
        self
    }

    pub fn set_anchor_x(&mut self, x: impl PixelValue) -> &mut Self {
        self.set_anchor(Some(x.to_px()), None)
    }

    pub fn set_anchor_y(&mut self, y: impl PixelValue) -> &mut Self {
        self.set_anchor(None, Some(y.to_px()))
    }

    /// Sets the sprite-sheet offset of the icon image.
    /// A `None` coordinate keeps its current value.
    pub fn set_origin(&mut self, x: Option<i32>, y: Option<i32>) -> &mut Self {
        if let Some(x) = x {
            self.origin.x = x;
        }
        if let Some(y) = y {
            self.origin.y = y;
        }
        self
    }

    pub fn set_origin_x(&mut self, x: impl PixelValue) -> &mut Self {
        self.set_origin(Some(x.to_px()), None)
    }

    pub fn set_origin_y(&mut self, y: impl PixelValue) -> &mut Self {
        self.set_origin(None, Some(y.to_px()))
    }

    pub fn descriptor(&self) -> IconDescriptor {
        IconDescriptor {
            url: self.source.clone(),
            size: self.size,
            anchor: self.anchor,
            origin: self.origin,
        }
    }
}

impl Serialize for MarkerIcon {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.descriptor().serialize(serializer)
    }
}

impl MapObject for MarkerIcon {
    fn object_type(&self) -> ObjectType {
        ObjectType::MarkerIcon
    }

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "url": self.source,
            "size": {
                "width": self.size.width,
                "height": self.size.height
            },
            "anchor": {
                "x": self.anchor.x,
                "y": self.anchor.y
            },
            "origin": {
                "x": self.origin.x,
                "y": self.origin.y
            }
        })
    }
}
