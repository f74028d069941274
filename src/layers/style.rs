//! Layer style schema: paint properties and layer specs.

use serde::Serialize;
use serde_json::{json, Value};

/// Zoom-interpolated value in the host's function-with-stops form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OpacityRamp {
    /// Exponential interpolation base.
    pub base: f64,
    /// `(zoom, opacity)` pairs.
    pub stops: [(f64, f64); 2],
}

/// Ramp shared by the zoom-faded overlays: fully transparent at zoom 16.4,
/// fully opaque at zoom 20.3197.
pub const ZOOM_FADE: OpacityRamp = OpacityRamp {
    base: 0.1,
    stops: [(16.4, 0.0), (20.3197, 1.0)],
};

/// Visual style for an overlay layer.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerStyle {
    /// Filled polygons: solid color plus outline.
    Fill {
        color: String,
        outline: String,
        opacity: Option<OpacityRamp>,
    },
    /// Lines: color plus width.
    Line {
        color: String,
        width: f64,
        opacity: Option<OpacityRamp>,
    },
}

impl LayerStyle {
    /// Host layer type string.
    pub fn layer_type(&self) -> &'static str {
        match self {
            LayerStyle::Fill { .. } => "fill",
            LayerStyle::Line { .. } => "line",
        }
    }

    /// Paint-property object for this style.
    pub fn paint(&self) -> Value {
        match self {
            LayerStyle::Fill {
                color,
                outline,
                opacity,
            } => {
                let mut paint = json!({
                    "fill-color": color,
                    "fill-outline-color": outline,
                });
                if let Some(ramp) = opacity {
                    paint["fill-opacity"] = json!(ramp);
                }
                paint
            }
            LayerStyle::Line {
                color,
                width,
                opacity,
            } => {
                let mut paint = json!({
                    "line-color": color,
                    "line-width": width,
                });
                if let Some(ramp) = opacity {
                    paint["line-opacity"] = json!(ramp);
                }
                paint
            }
        }
    }

    /// Complete layer spec for `layer_id`. The source key is the layer key;
    /// one source and one layer exist per identifier.
    pub fn layer_spec(&self, layer_id: &str) -> Value {
        json!({
            "id": layer_id,
            "type": self.layer_type(),
            "source": layer_id,
            "paint": self.paint(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_fade_serialization() {
        assert_eq!(
            json!(ZOOM_FADE),
            json!({ "base": 0.1, "stops": [[16.4, 0.0], [20.3197, 1.0]] })
        );
    }

    #[test]
    fn test_fill_paint_with_ramp() {
        let style = LayerStyle::Fill {
            color: "#F2DCBB".to_string(),
            outline: "#000000".to_string(),
            opacity: Some(ZOOM_FADE),
        };
        let paint = style.paint();
        assert_eq!(paint["fill-color"], "#F2DCBB");
        assert_eq!(paint["fill-outline-color"], "#000000");
        assert_eq!(paint["fill-opacity"]["base"], 0.1);
    }

    #[test]
    fn test_fill_paint_without_ramp_omits_opacity() {
        let style = LayerStyle::Fill {
            color: "#B2B2B2".to_string(),
            outline: "#FFEBAF".to_string(),
            opacity: None,
        };
        assert!(style.paint().get("fill-opacity").is_none());
    }

    #[test]
    fn test_line_layer_spec() {
        let style = LayerStyle::Line {
            color: "#969696".to_string(),
            width: 0.7,
            opacity: Some(ZOOM_FADE),
        };
        let spec = style.layer_spec("other");
        assert_eq!(spec["id"], "other");
        assert_eq!(spec["type"], "line");
        assert_eq!(spec["source"], "other");
        assert_eq!(spec["paint"]["line-width"], 0.7);
    }
}
