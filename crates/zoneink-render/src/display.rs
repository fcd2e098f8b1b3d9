//! Backend-agnostic display-list builder.
//!
//! Builds, from the board snapshot, the ordered list of styled paths a GPU
//! or canvas backend paints verbatim: zone outlines first (highlighted when
//! active), then strokes colored by their owning zone.

use crate::renderer::{RenderContext, Renderer};
use kurbo::{Affine, BezPath, Cap, Stroke};
use peniko::{Brush, Color, Fill};
use zoneink_core::{Polygon, StrokeSegment};

/// Fill used behind the active zone.
const ACTIVE_FILL: Color = Color::from_rgb8(0xee, 0xee, 0xee);
/// Outline of the active zone.
const ACTIVE_OUTLINE: Color = Color::from_rgb8(0x00, 0x00, 0x00);
/// Outline of inactive zones (dark gray).
const INACTIVE_OUTLINE: Color = Color::from_rgb8(0xa9, 0xa9, 0xa9);

const ACTIVE_OUTLINE_WIDTH: f64 = 1.5;
const INACTIVE_OUTLINE_WIDTH: f64 = 1.0;

/// How a display item is painted.
#[derive(Debug, Clone)]
pub enum Paint {
    Fill { brush: Brush, rule: Fill },
    Stroke { brush: Brush, style: Stroke },
}

/// One path plus its paint, in content space.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub path: BezPath,
    pub paint: Paint,
}

/// Ordered drawing commands for one frame. Paths are content-space; the
/// backend applies `transform` to place them on screen.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    pub transform: Affine,
    pub items: Vec<DisplayItem>,
}

/// Renderer that produces a [`DisplayList`].
#[derive(Debug, Default)]
pub struct DisplayListRenderer {
    list: DisplayList,
}

impl DisplayListRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The display list built by the last [`build_scene`](Renderer::build_scene).
    pub fn list(&self) -> &DisplayList {
        &self.list
    }

    fn push_zone(&mut self, polygon: &Polygon, active: bool) {
        let path = closed_path(polygon);
        if active {
            self.list.items.push(DisplayItem {
                path: path.clone(),
                paint: Paint::Fill {
                    brush: Brush::Solid(ACTIVE_FILL),
                    rule: Fill::NonZero,
                },
            });
        }
        let (color, width) = if active {
            (ACTIVE_OUTLINE, ACTIVE_OUTLINE_WIDTH)
        } else {
            (INACTIVE_OUTLINE, INACTIVE_OUTLINE_WIDTH)
        };
        self.list.items.push(DisplayItem {
            path,
            paint: Paint::Stroke {
                brush: Brush::Solid(color),
                style: Stroke::new(width),
            },
        });
    }

    fn push_stroke(&mut self, segment: &StrokeSegment, color: Color) {
        let mut path = BezPath::new();
        let Some(&first) = segment.points.first() else {
            return;
        };
        path.move_to(first);
        for &point in &segment.points[1..] {
            path.line_to(point);
        }
        self.list.items.push(DisplayItem {
            path,
            paint: Paint::Stroke {
                brush: Brush::Solid(color),
                style: Stroke::new(segment.brush_width).with_caps(Cap::Round),
            },
        });
    }
}

impl Renderer for DisplayListRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        let board = ctx.board;
        let stage = board.stage();
        self.list = DisplayList {
            transform: Affine::translate(stage.translation) * Affine::scale(stage.scale),
            items: Vec::new(),
        };

        for zone in board.zones() {
            self.push_zone(&zone.polygon, board.is_zone_active(zone));
        }
        for segment in board.strokes().segments() {
            let color = parse_hex_color(board.stroke_color(&segment.zone_id));
            self.push_stroke(segment, color);
        }
    }
}

/// Close a polygon into a bezier path.
fn closed_path(polygon: &Polygon) -> BezPath {
    let mut path = BezPath::new();
    let verts = polygon.vertices();
    path.move_to(verts[0]);
    for &vertex in &verts[1..] {
        path.line_to(vertex);
    }
    path.close_path();
    path
}

/// Parse an RGB hex string (e.g. `#6366f1`) to a color, falling back to
/// black for anything unparseable.
pub fn parse_hex_color(hex: &str) -> Color {
    if let Some(digits) = hex.strip_prefix('#') {
        if digits.len() == 6 {
            let r = u8::from_str_radix(&digits[0..2], 16);
            let g = u8::from_str_radix(&digits[2..4], 16);
            let b = u8::from_str_radix(&digits[4..6], 16);
            if let (Ok(r), Ok(g), Ok(b)) = (r, g, b) {
                return Color::from_rgb8(r, g, b);
            }
        }
    }
    Color::from_rgb8(0, 0, 0)
}
