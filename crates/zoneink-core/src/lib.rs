//! ZoneInk Core Library
//!
//! Platform-agnostic geometry, gesture and stroke logic for the ZoneInk
//! zone-painting board: colored polygonal zones on a pannable, zoomable
//! stage, with free-hand strokes confined to the currently active zone.

pub mod board;
pub mod geometry;
pub mod gesture;
pub mod hit;
pub mod stage;
pub mod strokes;
pub mod zones;

pub use board::Board;
pub use geometry::{GeometryError, Polygon, distance, midpoint, point_in_polygon};
pub use gesture::{
    DrawBaseline, GestureAction, GestureMachine, GestureMode, SessionState, TouchEvent, TouchPoint,
};
pub use hit::{zone_at_content, zone_at_screen};
pub use stage::{MAX_SCALE, MIN_SCALE, StageTransform};
pub use strokes::{DEFAULT_BRUSH_WIDTH, StrokeLog, StrokeSegment};
pub use zones::{
    BoardConfig, ColorDef, ColorId, ConfigError, DEFAULT_STROKE_COLOR, Zone, ZoneId,
};
