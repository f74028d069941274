#![warn(clippy::all)]

//! venue-map-layers - presentation-layer overlay management for a web-based
//! venue map.
//!
//! The host page owns an interactive map instance (Mapbox-GL-shaped API) and
//! the overall application lifecycle. This crate supplies the glue around it:
//! registering named GeoJSON overlay layers (doors, outlines, parking) with
//! fixed styles, wiring DOM-ready startup and menu navigation, and listening
//! for the page's `languageChanged` event.

pub mod i18n;
pub mod layers;
pub mod map;

#[cfg(target_arch = "wasm32")]
mod bootstrap;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Redirect `log` messages to `console.log`:
    wasm_logger::init(wasm_logger::Config::default());

    bootstrap::run()
}

/// JS-callable registrar for the built-in overlays.
///
/// `data` is either a URL string or an inline GeoJSON object; it is handed to
/// the map unvalidated. The layer comes up hidden until a UI control reveals
/// it.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = registerOverlay)]
pub fn register_overlay(layer_id: &str, data: JsValue) -> Result<(), JsValue> {
    let kind = layers::OverlayKind::from_id(layer_id)
        .ok_or_else(|| JsValue::from_str(&format!("unknown overlay: {layer_id}")))?;

    let mut map = map::MapboxMap::from_window()
        .ok_or_else(|| JsValue::from_str("map is not initialized"))?;

    let data = match data.as_string() {
        Some(url) => map::SourceData::Url(url),
        None => map::SourceData::Inline(serde_wasm_bindgen::from_value(data)?),
    };

    kind.register(&mut map, data);
    Ok(())
}
