use std::path::{Path, PathBuf};

use gmap_overlay::prelude::*;
use serde_json::json;

/// Integration tests that probe real image files on disk
#[cfg(test)]
mod integration_tests {
    use super::*;

    /// Helper to write a blank PNG of the given size
    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        image::RgbaImage::new(width, height).save(&path).unwrap();
        path
    }

    fn local_resolver(dir: &Path) -> DefaultResolver {
        DefaultResolver::new(ResolverConfig::local_only().with_base_dir(dir)).unwrap()
    }

    #[test]
    fn test_natural_size_scenario() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "icon.png", 40, 60);

        let icon = MarkerIcon::create_with(&local_resolver(dir.path()), "icon.png", None).unwrap();

        assert_eq!(icon.width(), 40);
        assert_eq!(icon.height(), 60);
        assert_eq!(icon.anchor(), Point::new(20, 60));
        assert_eq!(icon.origin(), Point::new(0, 0));
    }

    #[test]
    fn test_explicit_options_scenario() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "icon.png", 40, 60);

        let options = IconOptions::from_json(&json!({
            "width": 30,
            "height": 30,
            "anchor_x": 15,
            "anchor_y": 30
        }))
        .unwrap();
        let icon = MarkerIcon::create_with(&local_resolver(dir.path()), "icon.png", options).unwrap();

        assert_eq!((icon.width(), icon.height()), (30, 30));
        assert_eq!(icon.anchor(), Point::new(15, 30));
        assert_eq!(icon.origin(), Point::new(0, 0));
    }

    #[test]
    fn test_create_with_default_resolver_and_absolute_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "sprite.png", 128, 32);

        let icon = MarkerIcon::create(
            path.to_str().unwrap(),
            IconOptions::new().with_size(32, 32).with_origin(64, 0),
        )
        .unwrap();

        assert_eq!(icon.size(), Size::new(32, 32));
        assert_eq!(icon.anchor(), Point::new(16, 32));
        assert_eq!(icon.origin(), Point::new(64, 0));
    }

    #[test]
    fn test_jpeg_header_is_probed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.jpg");
        image::RgbImage::new(33, 21).save(&path).unwrap();

        let icon = MarkerIcon::create_with(&local_resolver(dir.path()), "photo.jpg", None).unwrap();
        assert_eq!(icon.size(), Size::new(33, 21));
        assert_eq!(icon.anchor(), Point::new(16, 21));
    }

    #[test]
    fn test_nonexistent_path_fails() {
        let result = MarkerIcon::create("/nonexistent/path.png", None);
        match result {
            Err(MapError::InvalidResource { source_url, .. }) => {
                assert_eq!(source_url, "/nonexistent/path.png");
            }
            other => panic!("expected InvalidResource, got {:?}", other),
        }
    }

    #[test]
    fn test_non_image_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("readme.png"), "not really a png").unwrap();

        let err = MarkerIcon::create_with(&local_resolver(dir.path()), "readme.png", None).unwrap_err();
        assert!(err.is_invalid_resource());
    }

    #[test]
    fn test_remote_disabled_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = MarkerIcon::create_with(
            &local_resolver(dir.path()),
            "https://example.com/pin.png",
            None,
        )
        .unwrap_err();
        assert!(err.is_invalid_resource());
    }

    #[test]
    fn test_marker_serializes_with_icon() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "pin.png", 20, 34);
        write_png(dir.path(), "shadow.png", 37, 34);
        let resolver = local_resolver(dir.path());

        let icon = MarkerIcon::create_with(&resolver, "pin.png", None).unwrap();
        let mut shadow = MarkerIcon::create_with(&resolver, "shadow.png", None).unwrap();
        shadow.set_anchor(Some(10), None);

        let marker = Marker::new(LatLng::new(48.8566, 2.3522))
            .with_title("Paris")
            .with_icon(icon)
            .with_shadow(shadow);

        let value: serde_json::Value = serde_json::from_str(&marker.to_json().unwrap()).unwrap();
        assert_eq!(
            value["icon"],
            json!({
                "url": "pin.png",
                "size": { "width": 20, "height": 34 },
                "anchor": { "x": 10, "y": 34 },
                "origin": { "x": 0, "y": 0 }
            })
        );
        assert_eq!(value["shadow"]["anchor"], json!({ "x": 10, "y": 34 }));
        assert_eq!(value["title"], "Paris");
    }
}
