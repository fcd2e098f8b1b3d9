//! Gesture state machine: decides, from live multi-touch input, whether the
//! user is panning the stage, pinch-zooming it, or drawing inside the active
//! zone.

use crate::geometry::{distance, midpoint};
use crate::hit::zone_at_content;
use crate::stage::StageTransform;
use crate::zones::{Zone, ZoneId};
use kurbo::{Point, Vec2};
use log::debug;
use serde::{Deserialize, Serialize};

/// One finger on the surface, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub position: Point,
    /// Reported contact radius; doubled into the brush diameter at stroke
    /// start. Zero means the input source reported none.
    pub radius: f64,
}

impl TouchPoint {
    /// A contact with no reported radius.
    pub fn new(position: Point) -> Self {
        Self {
            position,
            radius: 0.0,
        }
    }

    pub fn with_radius(position: Point, radius: f64) -> Self {
        Self { position, radius }
    }
}

/// Raw touch events delivered by the input source. Each event carries the
/// full current contact set, mirroring how touch lists are reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TouchEvent {
    Start { contacts: Vec<TouchPoint> },
    Move { contacts: Vec<TouchPoint> },
    End,
}

/// Gesture modes. Exactly one is active at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GestureMode {
    #[default]
    Idle,
    SinglePan,
    SingleDraw,
    PinchZoom,
}

/// Previous finger position (content space) and brush diameter of an
/// in-progress stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawBaseline {
    pub point: Point,
    pub brush_size: f64,
}

/// Ephemeral per-gesture scratch state, owned exclusively by the machine and
/// reset unconditionally on touch-end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Number of contacts currently tracked (0, 1 or 2).
    pub touch_count: usize,
    /// Two-finger distance from the previous pinch move. 0.0 is the sentinel
    /// for "no baseline yet" and is never used as a divisor.
    pub last_pinch_distance: f64,
    /// Baseline of the in-progress stroke, if any.
    pub draw_baseline: Option<DrawBaseline>,
    /// Zone owning the in-progress stroke, captured at touch-start. Segments
    /// keep recording under this id even if the selected color changes
    /// mid-stroke.
    pub draw_zone: Option<ZoneId>,
    /// Whether the current single-touch gesture began inside the active
    /// zone, locking it to drawing for its duration.
    pub began_in_active_zone: bool,
    /// Panning was suspended by a pinch; the next eligible single-touch move
    /// re-anchors and resumes it.
    pub pan_suspended: bool,
    /// Panning was halted by entering the active zone mid-pan; stays halted
    /// until touch-end.
    pub pan_halted: bool,
    /// Previous single-touch screen position, for pan deltas.
    pub last_pan_point: Option<Point>,
}

/// Outputs of the state machine, applied by the board.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureAction {
    /// Translate the stage by a screen-space delta.
    Pan(Vec2),
    /// Rescale the stage about the screen-space midpoint of the two touches.
    Zoom { midpoint: Point, factor: f64 },
    /// Start a new stroke with a zero-length seed segment.
    StrokeSeed {
        zone_id: ZoneId,
        point: Point,
        brush_size: f64,
    },
    /// Candidate stroke segment, subject to the accumulator's admission
    /// policy.
    StrokeSegment {
        zone_id: ZoneId,
        from: Point,
        to: Point,
        brush_size: f64,
    },
}

/// Consumes raw touch events and emits at most one gesture action per event.
///
/// The machine reads the zone list, the selected color and the current stage
/// transform but never mutates them; all shared-state mutation happens in the
/// board when it applies the returned action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureMachine {
    mode: GestureMode,
    session: SessionState,
}

impl GestureMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Process one raw touch event.
    pub fn handle(
        &mut self,
        event: &TouchEvent,
        zones: &[Zone],
        active_color_id: Option<&str>,
        stage: &StageTransform,
    ) -> Option<GestureAction> {
        match event {
            TouchEvent::Start { contacts } => match contacts.as_slice() {
                [] => None,
                [touch] => self.start_single(touch, zones, active_color_id, stage),
                [_, _, ..] => {
                    self.enter_pinch();
                    None
                }
            },
            TouchEvent::Move { contacts } => match contacts.as_slice() {
                [] => None,
                [touch] => self.move_single(touch, zones, active_color_id, stage),
                [a, b, ..] => self.move_pinch(a, b),
            },
            TouchEvent::End => {
                self.reset();
                None
            }
        }
    }

    /// Unconditionally clear all session state and return to idle.
    /// Idempotent.
    pub fn reset(&mut self) {
        self.mode = GestureMode::Idle;
        self.session = SessionState::default();
    }

    /// Fresh single-touch gesture: resolve the zone under the touch and lock
    /// the gesture mode for its duration.
    fn start_single(
        &mut self,
        touch: &TouchPoint,
        zones: &[Zone],
        active_color_id: Option<&str>,
        stage: &StageTransform,
    ) -> Option<GestureAction> {
        // A start while a gesture is still tracked means the previous one
        // ended without a touch-end; begin a clean session.
        self.session = SessionState::default();
        self.session.touch_count = 1;

        let content = stage.screen_to_content(touch.position);
        match zone_at_content(content, zones) {
            Some(zone) if zone.is_active(active_color_id) => {
                debug!("touch-start in active zone {}: entering draw", zone.id);
                self.mode = GestureMode::SingleDraw;
                self.session.began_in_active_zone = true;
                let brush_size = touch.radius * 2.0;
                self.session.draw_baseline = Some(DrawBaseline {
                    point: content,
                    brush_size,
                });
                self.session.draw_zone = Some(zone.id.clone());
                Some(GestureAction::StrokeSeed {
                    zone_id: zone.id.clone(),
                    point: content,
                    brush_size,
                })
            }
            _ => {
                self.mode = GestureMode::SinglePan;
                self.session.last_pan_point = Some(touch.position);
                None
            }
        }
    }

    fn move_single(
        &mut self,
        touch: &TouchPoint,
        zones: &[Zone],
        active_color_id: Option<&str>,
        stage: &StageTransform,
    ) -> Option<GestureAction> {
        match self.mode {
            // Move without a tracked start: no-op, no state mutation.
            GestureMode::Idle => None,
            GestureMode::SingleDraw => self.move_draw(touch, stage),
            GestureMode::SinglePan | GestureMode::PinchZoom => {
                self.move_pan(touch, zones, active_color_id, stage)
            }
        }
    }

    /// Emit the next stroke segment candidate. The baseline advances whether
    /// or not the accumulator later admits the segment, so each segment is
    /// measured from the true last finger position.
    fn move_draw(&mut self, touch: &TouchPoint, stage: &StageTransform) -> Option<GestureAction> {
        debug_assert!(self.session.began_in_active_zone);
        let baseline = self.session.draw_baseline?;
        let zone_id = self.session.draw_zone.clone()?;

        let content = stage.screen_to_content(touch.position);
        self.session.draw_baseline = Some(DrawBaseline {
            point: content,
            brush_size: baseline.brush_size,
        });
        Some(GestureAction::StrokeSegment {
            zone_id,
            from: baseline.point,
            to: content,
            brush_size: baseline.brush_size,
        })
    }

    fn move_pan(
        &mut self,
        touch: &TouchPoint,
        zones: &[Zone],
        active_color_id: Option<&str>,
        stage: &StageTransform,
    ) -> Option<GestureAction> {
        // One finger lifted mid-pinch: the pinch is over, fall back to
        // panning. Only a fresh touch-start can enter drawing.
        if self.mode == GestureMode::PinchZoom {
            self.mode = GestureMode::SinglePan;
            self.session.touch_count = 1;
            self.session.last_pinch_distance = 0.0;
        }

        if self.session.pan_halted {
            return None;
        }

        // Entering the active zone halts panning for the rest of the
        // gesture; the already-begun pan is never retroactively converted to
        // a draw.
        let content = stage.screen_to_content(touch.position);
        if let Some(zone) = zone_at_content(content, zones) {
            if zone.is_active(active_color_id) {
                debug!("pan entered active zone {}: halting pan", zone.id);
                self.session.pan_halted = true;
                self.session.last_pan_point = None;
                return None;
            }
        }

        // Resuming after a pinch: re-anchor first so the view does not jump.
        if self.session.pan_suspended {
            self.session.pan_suspended = false;
            self.session.last_pan_point = Some(touch.position);
            return None;
        }

        let last = match self.session.last_pan_point {
            Some(p) => p,
            None => {
                self.session.last_pan_point = Some(touch.position);
                return None;
            }
        };
        let delta = touch.position - last;
        self.session.last_pan_point = Some(touch.position);
        Some(GestureAction::Pan(delta))
    }

    fn move_pinch(&mut self, a: &TouchPoint, b: &TouchPoint) -> Option<GestureAction> {
        // A second touch appearing without a first: defensive no-op.
        if self.session.touch_count == 0 {
            return None;
        }
        if self.mode != GestureMode::PinchZoom {
            self.enter_pinch();
        }

        let dist = distance(a.position, b.position);
        // A zero stored distance means "no baseline yet"; never divide by it.
        let action = if self.session.last_pinch_distance > 0.0 {
            Some(GestureAction::Zoom {
                midpoint: midpoint(a.position, b.position),
                factor: dist / self.session.last_pinch_distance,
            })
        } else {
            None
        };
        self.session.last_pinch_distance = dist;
        action
    }

    /// Transition to pinch-zoom from any mode. A pan in progress is
    /// suspended, not cancelled.
    fn enter_pinch(&mut self) {
        if self.mode == GestureMode::SinglePan {
            debug!("second touch down: suspending pan for pinch");
            self.session.pan_suspended = true;
        }
        self.mode = GestureMode::PinchZoom;
        self.session.touch_count = 2;
        self.session.last_pinch_distance = 0.0;
    }
}
