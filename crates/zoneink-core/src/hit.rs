//! Zone hit index: topmost-zone lookup by point containment.

use crate::geometry::point_in_polygon;
use crate::stage::StageTransform;
use crate::zones::Zone;
use kurbo::Point;

/// Return the topmost zone containing a content-space point.
///
/// Zones are checked in declaration order and the first match wins, which
/// makes declaration order the stacking priority for overlapping zones.
/// `None` means the point is over empty board, a normal outcome.
pub fn zone_at_content(point: Point, zones: &[Zone]) -> Option<&Zone> {
    zones.iter().find(|z| point_in_polygon(point, &z.polygon))
}

/// Return the topmost zone containing a screen-space point.
///
/// Each zone polygon is re-expressed in screen space under the current stage
/// transform instead of inverse-mapping the pointer.
pub fn zone_at_screen<'a>(
    point: Point,
    zones: &'a [Zone],
    stage: &StageTransform,
) -> Option<&'a Zone> {
    zones.iter().find(|z| {
        z.polygon
            .transformed(stage.scale, stage.translation)
            .contains(point)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::BoardConfig;
    use kurbo::Vec2;

    #[test]
    fn test_zone_at_content() {
        let config = BoardConfig::demo();
        let hit = zone_at_content(Point::new(50.0, 50.0), &config.zones).unwrap();
        assert_eq!(hit.id, "zone1");
        assert!(zone_at_content(Point::new(500.0, 500.0), &config.zones).is_none());
    }

    #[test]
    fn test_first_declared_zone_wins_overlap() {
        // Two fully overlapping zones: the earlier declaration is topmost.
        let mut config = BoardConfig::demo();
        let top = config.zones[0].clone();
        let mut bottom = top.clone();
        bottom.id = "shadow".into();
        config.zones = vec![top, bottom];

        let hit = zone_at_content(Point::new(100.0, 100.0), &config.zones).unwrap();
        assert_eq!(hit.id, "zone1");
    }

    #[test]
    fn test_zone_at_screen() {
        let config = BoardConfig::demo();
        let stage = StageTransform {
            scale: 2.0,
            translation: Vec2::new(10.0, 0.0),
        };

        // zone1 spans [10, 410] x [0, 400] in screen space.
        let hit = zone_at_screen(Point::new(300.0, 100.0), &config.zones, &stage).unwrap();
        assert_eq!(hit.id, "zone1");
        assert!(zone_at_screen(Point::new(5.0, 100.0), &config.zones, &stage).is_none());
    }
}
