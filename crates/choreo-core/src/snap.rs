//! Grid snapping for board coordinates.

use kurbo::Point;

/// Default grid cell size (matches the visual grid).
pub const GRID_SIZE: f64 = 20.0;

/// Snap a single coordinate to the nearest multiple of `grid_size`.
///
/// Negative results are clamped to zero so that snapped coordinates
/// always land on the board.
pub fn snap_coord(value: f64, grid_size: f64) -> f64 {
    let snapped = (value / grid_size).round() * grid_size;
    // Also folds -0.0 into 0.0
    if snapped <= 0.0 { 0.0 } else { snapped }
}

/// Snap a point to the nearest grid intersection.
pub fn snap_to_grid(point: Point, grid_size: f64) -> Point {
    Point::new(snap_coord(point.x, grid_size), snap_coord(point.y, grid_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_on_grid(point: Point, grid_size: f64) -> bool {
        let on_axis = |v: f64| {
            let cells = v / grid_size;
            (cells - cells.round()).abs() < 1e-9
        };
        point.x >= 0.0 && point.y >= 0.0 && on_axis(point.x) && on_axis(point.y)
    }

    #[test]
    fn test_snap_rounds_to_nearest() {
        let p = snap_to_grid(Point::new(29.0, 31.0), GRID_SIZE);
        assert_eq!(p, Point::new(20.0, 40.0));
    }

    #[test]
    fn test_snap_half_rounds_away_from_zero() {
        let p = snap_to_grid(Point::new(10.0, 50.0), GRID_SIZE);
        assert_eq!(p, Point::new(20.0, 60.0));
    }

    #[test]
    fn test_snap_clamps_negative() {
        let p = snap_to_grid(Point::new(-35.0, -4.0), GRID_SIZE);
        assert_eq!(p, Point::new(0.0, 0.0));
        assert!(p.x.is_sign_positive());
    }

    #[test]
    fn test_snap_idempotent() {
        let samples = [
            Point::new(0.0, 0.0),
            Point::new(13.7, 99.2),
            Point::new(-8.0, 41.0),
            Point::new(1234.5, 0.4),
        ];
        for grid in [7.0, 20.0, 32.5] {
            for p in samples {
                let once = snap_to_grid(p, grid);
                let twice = snap_to_grid(once, grid);
                assert_eq!(once, twice);
                assert!(is_on_grid(once, grid));
            }
        }
    }
}
