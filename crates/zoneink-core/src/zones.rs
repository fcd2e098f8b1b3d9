//! Zone and color configuration: loading, validation and lookups.

use crate::geometry::{GeometryError, Polygon};
use kurbo::Point;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Stable identifier of a zone, taken from configuration.
pub type ZoneId = String;
/// Stable identifier of a selectable color.
pub type ColorId = String;

/// Stroke color used when a zone or color lookup misses.
pub const DEFAULT_STROKE_COLOR: &str = "#000000";

/// Errors raised while loading a board configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse board configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("zone {zone_id:?}: {source}")]
    InvalidZone {
        zone_id: String,
        source: GeometryError,
    },
    #[error("duplicate zone id {0:?}")]
    DuplicateZoneId(String),
    #[error("duplicate color id {0:?}")]
    DuplicateColorId(String),
}

/// A selectable display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorDef {
    pub id: ColorId,
    /// Display value as an RGB hex string, e.g. `#FF0000`.
    pub hex: String,
}

/// A paintable region of the board. Immutable for the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub id: ZoneId,
    /// Boundary in content space.
    pub polygon: Polygon,
    /// Color this zone answers to in the picker.
    pub color_id: ColorId,
}

impl Zone {
    /// A zone is active when its color id matches the selected color id.
    /// Derived, never stored.
    pub fn is_active(&self, active_color_id: Option<&str>) -> bool {
        active_color_id == Some(self.color_id.as_str())
    }
}

/// Raw zone document as parsed from JSON.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawZone {
    id: String,
    points: Vec<[f64; 2]>,
    color_id: String,
}

/// Raw configuration document.
#[derive(Debug, Deserialize)]
struct RawConfig {
    zones: Vec<RawZone>,
    colors: Vec<ColorDef>,
}

/// Validated board configuration.
///
/// Zone order is declaration order and doubles as stacking priority for
/// overlapping zones (first = topmost).
#[derive(Debug, Clone, Default)]
pub struct BoardConfig {
    pub zones: Vec<Zone>,
    pub colors: Vec<ColorDef>,
}

impl BoardConfig {
    /// Validate pre-built zones and colors: ids must be unique. Polygons are
    /// already guaranteed non-degenerate by [`Polygon::new`].
    pub fn new(zones: Vec<Zone>, colors: Vec<ColorDef>) -> Result<Self, ConfigError> {
        let mut zone_ids = HashSet::new();
        for zone in &zones {
            if !zone_ids.insert(zone.id.as_str()) {
                return Err(ConfigError::DuplicateZoneId(zone.id.clone()));
            }
        }
        let mut color_ids = HashSet::new();
        for color in &colors {
            if !color_ids.insert(color.id.as_str()) {
                return Err(ConfigError::DuplicateColorId(color.id.clone()));
            }
        }
        debug!(
            "board config loaded: {} zones, {} colors",
            zones.len(),
            colors.len()
        );
        Ok(Self { zones, colors })
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;
        let zones = raw
            .zones
            .into_iter()
            .map(|z| {
                let vertices = z.points.iter().map(|&[x, y]| Point::new(x, y)).collect();
                let polygon = Polygon::new(vertices).map_err(|source| {
                    ConfigError::InvalidZone {
                        zone_id: z.id.clone(),
                        source,
                    }
                })?;
                Ok(Zone {
                    id: z.id,
                    polygon,
                    color_id: z.color_id,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;
        Self::new(zones, raw.colors)
    }

    /// Look up a zone by id.
    pub fn zone(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    /// Look up a color by id.
    pub fn color(&self, id: &str) -> Option<&ColorDef> {
        self.colors.iter().find(|c| c.id == id)
    }

    /// Resolve the display color for a zone's strokes.
    ///
    /// A missing zone or color id falls back to the default stroke color;
    /// lookup misses are never errors at render time.
    pub fn stroke_color_for(&self, zone_id: &str) -> &str {
        self.zone(zone_id)
            .and_then(|zone| self.color(&zone.color_id))
            .map(|color| color.hex.as_str())
            .unwrap_or(DEFAULT_STROKE_COLOR)
    }

    /// The built-in three-zone demo board: two red-coded squares along the
    /// top and a blue-coded square below, straddling their seam. The shared
    /// color id means selecting it activates two zones at once.
    pub fn demo() -> Self {
        let square = |x0: f64, y0: f64, x1: f64, y1: f64| {
            Polygon::new(vec![
                Point::new(x0, y0),
                Point::new(x1, y0),
                Point::new(x1, y1),
                Point::new(x0, y1),
            ])
            .expect("demo polygons are non-degenerate")
        };
        Self::new(
            vec![
                Zone {
                    id: "zone1".into(),
                    polygon: square(0.0, 0.0, 200.0, 200.0),
                    color_id: "color1".into(),
                },
                Zone {
                    id: "zone2".into(),
                    polygon: square(200.0, 0.0, 400.0, 200.0),
                    color_id: "color1".into(),
                },
                Zone {
                    id: "zone3".into(),
                    polygon: square(100.0, 200.0, 300.0, 400.0),
                    color_id: "color2".into(),
                },
            ],
            vec![
                ColorDef {
                    id: "color1".into(),
                    hex: "#FF0000".into(),
                },
                ColorDef {
                    id: "color2".into(),
                    hex: "#0000FF".into(),
                },
            ],
        )
        .expect("demo config is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Raw string needs the doubled delimiter: the hex values contain `"#`.
    const CONFIG_JSON: &str = r##"{
        "zones": [
            { "id": "zone1", "points": [[0, 0], [200, 0], [200, 200], [0, 200]], "colorId": "color1" },
            { "id": "zone2", "points": [[200, 0], [400, 0], [400, 200], [200, 200]], "colorId": "color1" }
        ],
        "colors": [
            { "id": "color1", "hex": "#FF0000" }
        ]
    }"##;

    #[test]
    fn test_from_json() {
        let config = BoardConfig::from_json(CONFIG_JSON).unwrap();
        assert_eq!(config.zones.len(), 2);
        assert_eq!(config.colors.len(), 1);
        assert_eq!(config.zones[0].color_id, "color1");
        assert_eq!(config.zones[1].polygon.vertices().len(), 4);
    }

    #[test]
    fn test_degenerate_polygon_fails_fast() {
        let json = r#"{
            "zones": [ { "id": "bad", "points": [[0, 0], [1, 1]], "colorId": "c" } ],
            "colors": []
        }"#;
        let err = BoardConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidZone { ref zone_id, .. } if zone_id == "bad"));
    }

    #[test]
    fn test_duplicate_zone_id_rejected() {
        let json = r#"{
            "zones": [
                { "id": "z", "points": [[0,0],[1,0],[1,1]], "colorId": "c" },
                { "id": "z", "points": [[0,0],[2,0],[2,2]], "colorId": "c" }
            ],
            "colors": []
        }"#;
        let err = BoardConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateZoneId(ref id) if id == "z"));
    }

    #[test]
    fn test_active_is_derived_from_selected_color() {
        let config = BoardConfig::demo();
        let zone = config.zone("zone1").unwrap();
        assert!(zone.is_active(Some("color1")));
        assert!(!zone.is_active(Some("color2")));
        assert!(!zone.is_active(None));
    }

    #[test]
    fn test_demo_zones_share_a_color_without_overlapping() {
        let config = BoardConfig::demo();
        assert_eq!(config.zones[0].color_id, config.zones[1].color_id);
        assert_ne!(config.zones[0].color_id, config.zones[2].color_id);
        // zone3 straddles the top row's seam but its interior stays below it.
        assert!(config.zones[2].polygon.contains(Point::new(200.0, 300.0)));
        assert!(!config.zones[0].polygon.contains(Point::new(200.0, 300.0)));
        assert!(!config.zones[1].polygon.contains(Point::new(200.0, 300.0)));
    }

    #[test]
    fn test_stroke_color_resolution_and_fallback() {
        let config = BoardConfig::demo();
        assert_eq!(config.stroke_color_for("zone3"), "#0000FF");
        assert_eq!(config.stroke_color_for("missing"), DEFAULT_STROKE_COLOR);
    }
}
