//! In-memory [`MapApi`] double for tests.

use std::collections::BTreeMap;

use serde_json::Value;

use super::api::{MapApi, SourceData};

/// One recorded mutation, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapCall {
    AddSource(String),
    SetSourceData(String),
    AddLayer(String),
    SetLayoutProperty(String, String),
}

/// Fake map recording every mutation so tests can inspect the resulting
/// sources, layers, layout properties, and call ordering.
#[derive(Debug, Default)]
pub struct FakeMap {
    sources: BTreeMap<String, Value>,
    layers: BTreeMap<String, Value>,
    layout: BTreeMap<(String, String), Value>,
    calls: Vec<MapCall>,
}

impl FakeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// The `data` slot of the source keyed by `id`.
    pub fn source_data(&self, id: &str) -> Option<&Value> {
        self.sources.get(id)
    }

    /// The full spec the layer keyed by `id` was created with.
    pub fn layer_spec(&self, id: &str) -> Option<&Value> {
        self.layers.get(id)
    }

    /// The last value set for a layout property, if any.
    pub fn layout_property(&self, layer_id: &str, name: &str) -> Option<&Value> {
        self.layout.get(&(layer_id.to_string(), name.to_string()))
    }

    /// Every mutation in the order it was applied.
    pub fn calls(&self) -> &[MapCall] {
        &self.calls
    }
}

impl MapApi for FakeMap {
    fn has_source(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }

    fn add_geojson_source(&mut self, id: &str, data: &SourceData) {
        self.sources.insert(id.to_string(), data.to_json());
        self.calls.push(MapCall::AddSource(id.to_string()));
    }

    fn set_source_data(&mut self, id: &str, data: &SourceData) {
        if let Some(slot) = self.sources.get_mut(id) {
            *slot = data.to_json();
        }
        self.calls.push(MapCall::SetSourceData(id.to_string()));
    }

    fn has_layer(&self, id: &str) -> bool {
        self.layers.contains_key(id)
    }

    fn add_layer(&mut self, spec: &Value) {
        let id = spec["id"].as_str().unwrap_or_default().to_string();
        self.layers.insert(id.clone(), spec.clone());
        self.calls.push(MapCall::AddLayer(id));
    }

    fn set_layout_property(&mut self, layer_id: &str, name: &str, value: &Value) {
        self.layout
            .insert((layer_id.to_string(), name.to_string()), value.clone());
        self.calls
            .push(MapCall::SetLayoutProperty(layer_id.to_string(), name.to_string()));
    }
}
