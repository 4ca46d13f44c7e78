use super::{marker_icon::MarkerIcon, MapObject, ObjectType};
use crate::core::geo::LatLng;

/// A map marker, optionally drawn with a custom icon and shadow.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    position: LatLng,
    title: Option<String>,
    icon: Option<MarkerIcon>,
    shadow: Option<MarkerIcon>,
    clickable: bool,
    draggable: bool,
    visible: bool,
}

impl Marker {
    pub fn new(position: LatLng) -> Self {
        Self {
            position,
            title: None,
            icon: None,
            shadow: None,
            clickable: true,
            draggable: false,
            visible: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_icon(mut self, icon: MarkerIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_shadow(mut self, shadow: MarkerIcon) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn icon(&self) -> Option<&MarkerIcon> {
        self.icon.as_ref()
    }

    /// Mutable access so an attached icon can be adjusted in place.
    pub fn icon_mut(&mut self) -> Option<&mut MarkerIcon> {
        self.icon.as_mut()
    }

    pub fn shadow(&self) -> Option<&MarkerIcon> {
        self.shadow.as_ref()
    }

    pub fn is_clickable(&self) -> bool {
        self.clickable
    }

    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_position(&mut self, position: LatLng) -> &mut Self {
        self.position = position;
        self
    }

    pub fn set_title(&mut self, title: Option<String>) -> &mut Self {
        self.title = title;
        self
    }

    pub fn set_icon(&mut self, icon: Option<MarkerIcon>) -> &mut Self {
        self.icon = icon;
        self
    }

    pub fn set_shadow(&mut self, shadow: Option<MarkerIcon>) -> &mut Self {
        self.shadow = shadow;
        self
    }

    pub fn set_clickable(&mut self, clickable: bool) -> &mut Self {
        self.clickable = clickable;
        self
    }

    pub fn set_draggable(&mut self, draggable: bool) -> &mut Self {
        self.draggable = draggable;
        self
    }

    pub fn set_visible(&mut self, visible: bool) -> &mut Self {
        self.visible = visible;
        self
    }
}

impl MapObject for Marker {
    fn object_type(&self) -> ObjectType {
        ObjectType::Marker
    }

    fn options(&self) -> serde_json::Value {
        let mut options = serde_json::json!({
            "position": {
                "lat": self.position.lat,
                "lng": self.position.lng
            },
            "clickable": self.clickable,
            "draggable": self.draggable,
            "visible": self.visible
        });

        if let Some(map) = options.as_object_mut() {
            if let Some(title) = &self.title {
                map.insert("title".to_string(), title.clone().into());
            }
            if let Some(icon) = &self.icon {
                map.insert("icon".to_string(), icon.options());
            }
            if let Some(shadow) = &self.shadow {
                map.insert("shadow".to_string(), shadow.options());
            }
        }

        options
    }
}
