//! Mapbox GL backend for the [`MapApi`] seam.
//!
//! Thin wrappers over the host map object; no state, no logic. The map
//! instance itself is created and owned by the host page.

use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::api::{MapApi, SourceData};

#[wasm_bindgen]
extern "C" {
    /// Handle to the host `mapboxgl.Map` instance.
    pub type HostMap;

    #[wasm_bindgen(method, js_name = getSource)]
    fn get_source(this: &HostMap, id: &str) -> JsValue;

    #[wasm_bindgen(method, js_name = addSource)]
    fn add_source(this: &HostMap, id: &str, spec: &JsValue);

    #[wasm_bindgen(method, js_name = getLayer)]
    fn get_layer(this: &HostMap, id: &str) -> JsValue;

    #[wasm_bindgen(method, js_name = addLayer)]
    fn add_layer(this: &HostMap, spec: &JsValue);

    #[wasm_bindgen(method, js_name = setLayoutProperty)]
    fn set_layout_property(this: &HostMap, layer_id: &str, name: &str, value: &JsValue);

    /// GeoJSON source object as returned by `getSource`.
    type GeoJsonSource;

    #[wasm_bindgen(method, js_name = setData)]
    fn set_data(this: &GeoJsonSource, data: &JsValue);
}

/// Shared map handle wrapping the instance the host page created at startup.
pub struct MapboxMap {
    inner: HostMap,
}

impl MapboxMap {
    pub fn new(inner: HostMap) -> Self {
        Self { inner }
    }

    /// Grabs the instance the host page exposes as `window.map`.
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let map = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("map")).ok()?;
        if map.is_undefined() || map.is_null() {
            return None;
        }
        Some(Self {
            inner: map.unchecked_into(),
        })
    }
}

/// The host expects plain objects, not JS `Map`s.
fn to_js(value: &Value) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or_else(|err| {
            log::warn!("Spec serialization failed: {err}");
            JsValue::NULL
        })
}

impl MapApi for MapboxMap {
    fn has_source(&self, id: &str) -> bool {
        !self.inner.get_source(id).is_undefined()
    }

    fn add_geojson_source(&mut self, id: &str, data: &SourceData) {
        self.inner.add_source(id, &to_js(&data.source_spec()));
    }

    fn set_source_data(&mut self, id: &str, data: &SourceData) {
        let source: GeoJsonSource = self.inner.get_source(id).unchecked_into();
        source.set_data(&to_js(&data.to_json()));
    }

    fn has_layer(&self, id: &str) -> bool {
        !self.inner.get_layer(id).is_undefined()
    }

    fn add_layer(&mut self, spec: &Value) {
        self.inner.add_layer(&to_js(spec));
    }

    fn set_layout_property(&mut self, layer_id: &str, name: &str, value: &Value) {
        self.inner.set_layout_property(layer_id, name, &to_js(value));
    }
}
