//! Coordinate mapping between screen space and board space.

use crate::config::{ConfigError, ConfigResult};
use crate::snap::{GRID_SIZE, snap_to_grid};
use kurbo::{Point, Rect, Vec2};

/// CoordinateMapper converts raw pointer positions into board coordinates.
///
/// The board is never scaled: converting a client point is a plain
/// translation by the surface origin, followed by snapping to the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    /// Top-left corner of the surface in screen coordinates.
    offset: Vec2,
    /// Grid cell edge length. Always positive.
    square_size: f64,
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            square_size: GRID_SIZE,
        }
    }
}

impl CoordinateMapper {
    /// Create a mapper with an unmeasured (zero) offset.
    ///
    /// Fails unless `square_size` is a positive number.
    pub fn new(square_size: f64) -> ConfigResult<Self> {
        if !(square_size > 0.0) {
            return Err(ConfigError::NotPositive {
                field: "square_size",
                value: square_size,
            });
        }
        Ok(Self {
            square_size,
            ..Self::default()
        })
    }

    /// Extract the surface origin from its bounding box.
    pub fn compute_offset(bounds: Rect) -> Vec2 {
        Vec2::new(bounds.x0, bounds.y0)
    }

    /// Store a measured offset.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// Current surface origin. `(0, 0)` until measured.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Grid cell edge length.
    pub fn square_size(&self) -> f64 {
        self.square_size
    }

    /// Convert a client (screen) point into board-local coordinates.
    pub fn to_board_local(&self, client: Point) -> Point {
        client - self.offset
    }

    /// Snap a board-local point to the grid.
    pub fn snap(&self, point: Point) -> Point {
        snap_to_grid(point, self.square_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mapper() {
        let mapper = CoordinateMapper::default();
        assert_eq!(mapper.offset(), Vec2::ZERO);
        assert!((mapper.square_size() - GRID_SIZE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_offset_application() {
        let mut mapper = CoordinateMapper::new(20.0).unwrap();
        mapper.set_offset(Vec2::new(100.0, 100.0));
        let local = mapper.to_board_local(Point::new(150.0, 120.0));
        assert!((local.x - 50.0).abs() < f64::EPSILON);
        assert!((local.y - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unmeasured_offset_is_identity() {
        let mapper = CoordinateMapper::new(20.0).unwrap();
        let local = mapper.to_board_local(Point::new(37.0, 12.0));
        assert_eq!(local, Point::new(37.0, 12.0));
    }

    #[test]
    fn test_compute_offset_uses_top_left() {
        let bounds = Rect::new(64.0, 48.0, 864.0, 648.0);
        assert_eq!(CoordinateMapper::compute_offset(bounds), Vec2::new(64.0, 48.0));
    }

    #[test]
    fn test_snap_uses_square_size() {
        let mapper = CoordinateMapper::new(25.0).unwrap();
        assert_eq!(mapper.snap(Point::new(38.0, 12.0)), Point::new(50.0, 0.0));
    }

    #[test]
    fn test_rejects_non_positive_square_size() {
        for bad in [0.0, -20.0, f64::NAN] {
            let err = CoordinateMapper::new(bad).unwrap_err();
            assert!(matches!(err, ConfigError::NotPositive { field: "square_size", .. }));
        }
    }
}
