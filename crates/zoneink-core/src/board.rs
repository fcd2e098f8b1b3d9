//! Board aggregate: owns the shared state and routes gesture actions.
//!
//! The board is the single writer of the stage transform and the stroke log;
//! the rendering adapter observes both read-only between events.

use crate::gesture::{GestureAction, GestureMachine, GestureMode, TouchEvent};
use crate::stage::StageTransform;
use crate::strokes::StrokeLog;
use crate::zones::{BoardConfig, ColorDef, ColorId, Zone};

#[derive(Debug, Clone, Default)]
pub struct Board {
    config: BoardConfig,
    active_color_id: Option<ColorId>,
    stage: StageTransform,
    strokes: StrokeLog,
    gestures: GestureMachine,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            active_color_id: None,
            stage: StageTransform::new(),
            strokes: StrokeLog::new(),
            gestures: GestureMachine::new(),
        }
    }

    /// Board preloaded with the built-in demo configuration.
    pub fn demo() -> Self {
        Self::new(BoardConfig::demo())
    }

    pub fn zones(&self) -> &[Zone] {
        &self.config.zones
    }

    pub fn colors(&self) -> &[ColorDef] {
        &self.config.colors
    }

    pub fn stage(&self) -> StageTransform {
        self.stage
    }

    pub fn strokes(&self) -> &StrokeLog {
        &self.strokes
    }

    pub fn mode(&self) -> GestureMode {
        self.gestures.mode()
    }

    /// Currently selected color id, written only by the picker collaborator.
    pub fn active_color_id(&self) -> Option<&str> {
        self.active_color_id.as_deref()
    }

    pub fn set_active_color(&mut self, id: Option<ColorId>) {
        self.active_color_id = id;
    }

    /// Whether a zone is active under the current color selection.
    pub fn is_zone_active(&self, zone: &Zone) -> bool {
        zone.is_active(self.active_color_id())
    }

    /// Resolve the display color for a zone's strokes, with the default
    /// fallback for lookup misses.
    pub fn stroke_color(&self, zone_id: &str) -> &str {
        self.config.stroke_color_for(zone_id)
    }

    /// Explicitly clear the stroke log.
    pub fn clear_strokes(&mut self) {
        self.strokes.clear();
    }

    /// Feed one raw touch event through the gesture machine and apply its
    /// output to the shared state. Runs to completion before the next event.
    pub fn handle_touch(&mut self, event: &TouchEvent) {
        let action = self.gestures.handle(
            event,
            &self.config.zones,
            self.active_color_id.as_deref(),
            &self.stage,
        );
        match action {
            Some(GestureAction::Pan(delta)) => {
                self.stage = self.stage.panned(delta);
            }
            Some(GestureAction::Zoom { midpoint, factor }) => {
                self.stage = self.stage.pinched(midpoint, factor);
            }
            Some(GestureAction::StrokeSeed {
                zone_id,
                point,
                brush_size,
            }) => {
                self.strokes.begin_stroke(zone_id, point, brush_size);
            }
            Some(GestureAction::StrokeSegment {
                zone_id,
                from,
                to,
                brush_size,
            }) => {
                // The zone id was captured at stroke start; a zone that no
                // longer resolves simply drops the segment.
                if let Some(zone) = self.config.zone(&zone_id) {
                    self.strokes.push_segment(zone, from, to, brush_size);
                }
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::TouchPoint;
    use kurbo::{Point, Vec2};

    fn start_at(x: f64, y: f64, radius: f64) -> TouchEvent {
        TouchEvent::Start {
            contacts: vec![TouchPoint::with_radius(Point::new(x, y), radius)],
        }
    }

    fn move_to(points: &[(f64, f64)]) -> TouchEvent {
        TouchEvent::Move {
            contacts: points
                .iter()
                .map(|&(x, y)| TouchPoint::new(Point::new(x, y)))
                .collect(),
        }
    }

    #[test]
    fn test_draw_session_accumulates_admitted_segments() {
        let mut board = Board::demo();
        board.set_active_color(Some("color1".into()));

        board.handle_touch(&start_at(50.0, 50.0, 8.0));
        board.handle_touch(&move_to(&[(80.0, 50.0)]));
        // Exits zone1: one endpoint still inside, admitted.
        board.handle_touch(&move_to(&[(50.0, -30.0)]));
        // Fully outside: discarded, but the baseline advanced.
        board.handle_touch(&move_to(&[(80.0, -30.0)]));
        // Re-enters: admitted with the true last position as start.
        board.handle_touch(&move_to(&[(80.0, 40.0)]));
        board.handle_touch(&TouchEvent::End);

        let segments = board.strokes().segments();
        assert_eq!(segments.len(), 4); // seed + 3 admitted segments
        assert_eq!(
            segments[3].points,
            vec![Point::new(80.0, -30.0), Point::new(80.0, 40.0)]
        );
        assert!(segments.iter().all(|s| s.zone_id == "zone1"));
        assert!(segments.iter().all(|s| (s.brush_width - 16.0).abs() < f64::EPSILON));
        assert_eq!(board.mode(), GestureMode::Idle);
    }

    #[test]
    fn test_stroke_keeps_zone_captured_at_start() {
        let mut board = Board::demo();
        board.set_active_color(Some("color1".into()));

        board.handle_touch(&start_at(50.0, 50.0, 8.0));
        // Color changes mid-stroke; segments keep recording under zone1.
        board.set_active_color(Some("color2".into()));
        board.handle_touch(&move_to(&[(60.0, 60.0)]));

        let segments = board.strokes().segments();
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(|s| s.zone_id == "zone1"));
    }

    #[test]
    fn test_pinch_zoom_updates_stage_with_fixed_anchor() {
        let mut board = Board::demo();

        board.handle_touch(&TouchEvent::Start {
            contacts: vec![
                TouchPoint::new(Point::new(100.0, 100.0)),
                TouchPoint::new(Point::new(200.0, 100.0)),
            ],
        });
        board.handle_touch(&move_to(&[(100.0, 100.0), (200.0, 100.0)]));
        let anchor_before = board.stage().screen_to_content(Point::new(150.0, 100.0));

        board.handle_touch(&move_to(&[(90.0, 100.0), (210.0, 100.0)]));

        let stage = board.stage();
        assert!((stage.scale - 1.2).abs() < 1e-12);
        let anchor_after = stage.screen_to_content(Point::new(150.0, 100.0));
        assert!((anchor_after.x - anchor_before.x).abs() < 1e-9);
        assert!((anchor_after.y - anchor_before.y).abs() < 1e-9);
    }

    #[test]
    fn test_pan_updates_translation() {
        let mut board = Board::demo();
        board.handle_touch(&start_at(500.0, 500.0, 0.0));
        board.handle_touch(&move_to(&[(512.0, 497.0)]));
        assert_eq!(board.stage().translation, Vec2::new(12.0, -3.0));
    }

    #[test]
    fn test_pan_crossing_active_zone_draws_nothing() {
        let mut board = Board::demo();
        board.set_active_color(Some("color1".into()));

        board.handle_touch(&start_at(500.0, 500.0, 0.0));
        board.handle_touch(&move_to(&[(50.0, 50.0)]));
        board.handle_touch(&move_to(&[(60.0, 60.0)]));

        assert!(board.strokes().is_empty());
        assert_eq!(board.mode(), GestureMode::SinglePan);
    }

    #[test]
    fn test_stroke_color_falls_back_for_unknown_zone() {
        let board = Board::demo();
        assert_eq!(board.stroke_color("zone1"), "#FF0000");
        assert_eq!(board.stroke_color("missing"), "#000000");
    }
}
