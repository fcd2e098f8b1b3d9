//! Stage transform: the pan/zoom mapping between screen and content space.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Minimum allowed stage scale. Keeps the scale strictly positive under any
/// pinch input.
pub const MIN_SCALE: f64 = 0.1;
/// Maximum allowed stage scale.
pub const MAX_SCALE: f64 = 10.0;

/// Uniform scale plus translation, defining `content = (screen - translation) / scale`.
///
/// The transform is a plain value: pan and pinch-zoom are pure functions
/// producing a new transform, and the renderer consumes whatever value is
/// current between events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageTransform {
    pub scale: f64,
    pub translation: Vec2,
}

impl Default for StageTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translation: Vec2::ZERO,
        }
    }
}

impl StageTransform {
    /// Identity transform: scale 1, no translation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a screen-space point into content space.
    pub fn screen_to_content(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.translation.x) / self.scale,
            (screen.y - self.translation.y) / self.scale,
        )
    }

    /// Map a content-space point onto the screen.
    pub fn content_to_screen(&self, content: Point) -> Point {
        Point::new(
            content.x * self.scale + self.translation.x,
            content.y * self.scale + self.translation.y,
        )
    }

    /// Pan by a screen-space delta.
    #[must_use]
    pub fn panned(&self, delta: Vec2) -> Self {
        Self {
            scale: self.scale,
            translation: self.translation + delta,
        }
    }

    /// Rescale by `factor`, keeping the screen-space `midpoint` fixed.
    ///
    /// The translation is recomputed as
    /// `midpoint - (midpoint - translation) * factor`, so the content under
    /// the two touches stays visually stationary while the scale changes.
    /// The scale is clamped to the valid range and the anchor math uses the
    /// factor that was actually applied.
    #[must_use]
    pub fn pinched(&self, midpoint: Point, factor: f64) -> Self {
        let new_scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        let applied = new_scale / self.scale;
        Self {
            scale: new_scale,
            translation: Vec2::new(
                midpoint.x - (midpoint.x - self.translation.x) * applied,
                midpoint.y - (midpoint.y - self.translation.y) * applied,
            ),
        }
    }
}
