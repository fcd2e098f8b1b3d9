//! Stroke accumulation: the admission policy and the append-only stroke log.

use crate::zones::{Zone, ZoneId};
use kurbo::Point;
use log::trace;

/// Brush width used when the contact never reported a usable radius.
pub const DEFAULT_BRUSH_WIDTH: f64 = 30.0;

/// One accepted piece of a stroke: a single-point seed or a two-point
/// segment, in content space. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeSegment {
    pub points: Vec<Point>,
    pub brush_width: f64,
    /// Zone the segment was drawn into; resolved to a color at render time.
    pub zone_id: ZoneId,
}

/// Append-only log of accepted stroke segments for the session. Shrinks only
/// through an explicit [`clear`](StrokeLog::clear).
#[derive(Debug, Clone, Default)]
pub struct StrokeLog {
    segments: Vec<StrokeSegment>,
}

impl StrokeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[StrokeSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Explicit reset, the only way the log shrinks.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Record the zero-length seed of a new stroke.
    pub fn begin_stroke(&mut self, zone_id: ZoneId, point: Point, brush_size: f64) {
        self.segments.push(StrokeSegment {
            points: vec![point],
            brush_width: effective_width(brush_size),
            zone_id,
        });
    }

    /// Apply the admission policy to a candidate segment.
    ///
    /// The segment is appended only if at least one endpoint lies inside the
    /// owning zone's polygon. This lets a stroke that briefly exits and
    /// re-enters a concave zone keep its boundary-crossing parts, while
    /// fully-external motion records nothing. Returns whether the segment
    /// was accepted.
    pub fn push_segment(&mut self, zone: &Zone, from: Point, to: Point, brush_size: f64) -> bool {
        if !zone.polygon.contains(from) && !zone.polygon.contains(to) {
            trace!("segment fully outside zone {}: discarded", zone.id);
            return false;
        }
        self.segments.push(StrokeSegment {
            points: vec![from, to],
            brush_width: effective_width(brush_size),
            zone_id: zone.id.clone(),
        });
        true
    }
}

/// Non-positive sizes mean no radius was ever captured for the gesture.
fn effective_width(brush_size: f64) -> f64 {
    if brush_size > 0.0 {
        brush_size
    } else {
        DEFAULT_BRUSH_WIDTH
    }
}
