//! Map handle seam.

use serde_json::{json, Value};

/// GeoJSON payload for a source: an inline object or a URL the host map
/// resolves itself.
///
/// Inline payloads are carried as raw JSON on purpose. Nothing here validates
/// them; a malformed payload is the host library's failure mode.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceData {
    Inline(Value),
    Url(String),
}

impl SourceData {
    /// The value placed in the source spec's `data` slot.
    pub fn to_json(&self) -> Value {
        match self {
            SourceData::Inline(value) => value.clone(),
            SourceData::Url(url) => Value::String(url.clone()),
        }
    }

    /// Complete GeoJSON source spec as the host map expects it.
    pub fn source_spec(&self) -> Value {
        json!({ "type": "geojson", "data": self.to_json() })
    }
}

impl From<geojson::FeatureCollection> for SourceData {
    fn from(collection: geojson::FeatureCollection) -> Self {
        let value = serde_json::to_value(geojson::GeoJson::FeatureCollection(collection))
            .expect("feature collection serializes to JSON");
        SourceData::Inline(value)
    }
}

impl From<&str> for SourceData {
    fn from(url: &str) -> Self {
        SourceData::Url(url.to_string())
    }
}

impl From<String> for SourceData {
    fn from(url: String) -> Self {
        SourceData::Url(url)
    }
}

/// The slice of the host map's API this crate consumes.
///
/// Modeled as an explicitly passed dependency rather than a module-level
/// singleton so registrars can run against a fake double in tests. All
/// methods are synchronous mutations; the host UI runtime serializes event
/// handling, so no further access discipline is needed.
pub trait MapApi {
    /// Whether a source keyed by `id` exists on the map.
    fn has_source(&self, id: &str) -> bool;

    /// Creates a GeoJSON source keyed by `id`.
    fn add_geojson_source(&mut self, id: &str, data: &SourceData);

    /// Replaces the data of the existing source keyed by `id` in place.
    fn set_source_data(&mut self, id: &str, data: &SourceData);

    /// Whether a layer keyed by the spec's id exists on the map.
    fn has_layer(&self, id: &str) -> bool;

    /// Adds a layer from a complete layer spec (`id`, `type`, `source`,
    /// `paint`).
    fn add_layer(&mut self, spec: &Value);

    /// Sets a layout property (e.g. `visibility`) on an existing layer.
    fn set_layout_property(&mut self, layer_id: &str, name: &str, value: &Value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_source_spec() {
        let data = SourceData::from("https://example.com/doors.geojson");
        assert_eq!(
            data.source_spec(),
            json!({ "type": "geojson", "data": "https://example.com/doors.geojson" })
        );
    }

    #[test]
    fn test_inline_source_spec_passes_payload_through() {
        let payload = json!({ "type": "FeatureCollection", "features": [] });
        let data = SourceData::Inline(payload.clone());
        assert_eq!(data.to_json(), payload);
        assert_eq!(data.source_spec()["type"], "geojson");
    }

    #[test]
    fn test_feature_collection_conversion() {
        let collection = geojson::FeatureCollection {
            bbox: None,
            features: vec![],
            foreign_members: None,
        };
        let data = SourceData::from(collection);
        assert_eq!(
            data.to_json(),
            json!({ "type": "FeatureCollection", "features": [] })
        );
    }
}
