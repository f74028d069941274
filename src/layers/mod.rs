//! Overlay layer registration.
//!
//! One parameterized registrar covers every overlay; the per-feature
//! differences live entirely in the style descriptor. Registrars are
//! stateless aside from the map handle they are given and are safe to call
//! repeatedly.

mod style;

pub use style::{LayerStyle, OpacityRamp, ZOOM_FADE};

use serde_json::json;

use crate::map::{MapApi, SourceData};

/// Ensures a source and a styled layer keyed by `layer_id` exist on `map`,
/// then hides the layer.
///
/// If the source already exists its data is replaced in place; a duplicate is
/// never created. The layer is only created if missing; an existing layer
/// keeps its style. Visibility is reset to hidden on every call, including
/// when some other caller had made the layer visible — revealing a layer is
/// the job of an external UI control.
pub fn register_layer(map: &mut dyn MapApi, layer_id: &str, data: SourceData, style: &LayerStyle) {
    if map.has_source(layer_id) {
        map.set_source_data(layer_id, &data);
    } else {
        map.add_geojson_source(layer_id, &data);
    }

    if !map.has_layer(layer_id) {
        map.add_layer(&style.layer_spec(layer_id));
    }

    map.set_layout_property(layer_id, "visibility", &json!("none"));
}

/// The built-in venue overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// Door footprints (fill).
    Doors,
    /// Remaining venue outlines (line).
    OtherLines,
    /// Parking areas (fill).
    Parking,
}

impl OverlayKind {
    /// Stable identifier used as both source key and layer key.
    pub fn id(&self) -> &'static str {
        match self {
            OverlayKind::Doors => "doors",
            OverlayKind::OtherLines => "other",
            OverlayKind::Parking => "parking",
        }
    }

    /// Looks an overlay up by its identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.id() == id)
    }

    /// Fixed style for this overlay.
    pub fn style(&self) -> LayerStyle {
        match self {
            OverlayKind::Doors => LayerStyle::Fill {
                color: "#F2DCBB".to_string(),
                outline: "#000000".to_string(),
                opacity: Some(ZOOM_FADE),
            },
            OverlayKind::OtherLines => LayerStyle::Line {
                color: "#969696".to_string(),
                width: 0.7,
                opacity: Some(ZOOM_FADE),
            },
            OverlayKind::Parking => LayerStyle::Fill {
                color: "#B2B2B2".to_string(),
                outline: "#FFEBAF".to_string(),
                opacity: None,
            },
        }
    }

    pub fn all() -> &'static [OverlayKind] {
        &[
            OverlayKind::Doors,
            OverlayKind::OtherLines,
            OverlayKind::Parking,
        ]
    }

    /// Registers this overlay on `map` with its fixed style.
    pub fn register(&self, map: &mut dyn MapApi, data: SourceData) {
        register_layer(map, self.id(), data, &self.style());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::fake::{FakeMap, MapCall};
    use serde_json::json;

    fn empty_collection() -> SourceData {
        SourceData::Inline(json!({ "type": "FeatureCollection", "features": [] }))
    }

    #[test]
    fn test_first_registration_creates_source_and_layer_hidden() {
        let mut map = FakeMap::new();
        OverlayKind::Doors.register(&mut map, empty_collection());

        assert_eq!(map.source_count(), 1);
        assert_eq!(map.layer_count(), 1);

        let spec = map.layer_spec("doors").unwrap();
        assert_eq!(spec["type"], "fill");
        assert_eq!(spec["paint"]["fill-color"], "#F2DCBB");
        assert_eq!(spec["paint"]["fill-outline-color"], "#000000");

        assert_eq!(
            map.layout_property("doors", "visibility"),
            Some(&json!("none"))
        );
    }

    #[test]
    fn test_reregistration_updates_source_data_in_place() {
        let mut map = FakeMap::new();
        OverlayKind::Parking.register(&mut map, SourceData::from("https://example.com/a.geojson"));
        OverlayKind::Parking.register(&mut map, SourceData::from("https://example.com/b.geojson"));

        assert_eq!(map.source_count(), 1);
        assert_eq!(map.layer_count(), 1);
        assert_eq!(
            map.source_data("parking"),
            Some(&json!("https://example.com/b.geojson"))
        );
    }

    #[test]
    fn test_every_call_resets_visibility_to_hidden() {
        let mut map = FakeMap::new();
        OverlayKind::OtherLines.register(&mut map, empty_collection());

        // Some external control reveals the layer...
        map.set_layout_property("other", "visibility", &json!("visible"));

        // ...and a refresh hides it again.
        OverlayKind::OtherLines.register(&mut map, empty_collection());
        assert_eq!(
            map.layout_property("other", "visibility"),
            Some(&json!("none"))
        );
    }

    #[test]
    fn test_mutation_ordering() {
        let mut map = FakeMap::new();
        OverlayKind::Doors.register(&mut map, empty_collection());
        OverlayKind::Doors.register(&mut map, empty_collection());

        assert_eq!(
            map.calls(),
            &[
                MapCall::AddSource("doors".to_string()),
                MapCall::AddLayer("doors".to_string()),
                MapCall::SetLayoutProperty("doors".to_string(), "visibility".to_string()),
                MapCall::SetSourceData("doors".to_string()),
                MapCall::SetLayoutProperty("doors".to_string(), "visibility".to_string()),
            ]
        );
    }

    #[test]
    fn test_parking_style_has_no_opacity_ramp() {
        let mut map = FakeMap::new();
        OverlayKind::Parking.register(&mut map, empty_collection());

        let spec = map.layer_spec("parking").unwrap();
        assert_eq!(spec["paint"]["fill-color"], "#B2B2B2");
        assert_eq!(spec["paint"]["fill-outline-color"], "#FFEBAF");
        assert!(spec["paint"].get("fill-opacity").is_none());
    }

    #[test]
    fn test_catalog_ids_round_trip() {
        for kind in OverlayKind::all() {
            assert_eq!(OverlayKind::from_id(kind.id()), Some(*kind));
        }
        assert_eq!(OverlayKind::from_id("escalators"), None);
    }

    #[test]
    fn test_generic_registrar_accepts_custom_style() {
        let mut map = FakeMap::new();
        let style = LayerStyle::Line {
            color: "#FF0000".to_string(),
            width: 2.0,
            opacity: None,
        };
        register_layer(&mut map, "evacuation-routes", "/routes.geojson".into(), &style);

        let spec = map.layer_spec("evacuation-routes").unwrap();
        assert_eq!(spec["source"], "evacuation-routes");
        assert_eq!(spec["paint"]["line-color"], "#FF0000");
        assert_eq!(
            map.layout_property("evacuation-routes", "visibility"),
            Some(&json!("none"))
        );
    }
}
