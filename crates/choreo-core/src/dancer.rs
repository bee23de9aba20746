//! Dancer markers placed on the board.

use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for dancers.
pub type DancerId = Uuid;

/// A placeable, movable marker with a path of transition waypoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dancer {
    pub(crate) id: DancerId,
    /// Current snapped board position.
    pub position: Point,
    /// Transition waypoints, starting at the placement point.
    pub path: Vec<Point>,
    /// Optional display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Dancer {
    /// Create a dancer at a board position.
    pub fn new(position: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            path: vec![position],
            label: None,
        }
    }

    pub fn id(&self) -> DancerId {
        self.id
    }

    /// Move the dancer without touching its path.
    pub fn move_to(&mut self, position: Point) {
        self.position = position;
    }

    /// Append a waypoint to the path.
    pub fn add_path(&mut self, point: Point) {
        self.path.push(point);
    }

    /// Check if a board point falls within `radius` of the marker center.
    pub fn hit_test(&self, point: Point, radius: f64) -> bool {
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        dx * dx + dy * dy <= radius * radius
    }

    /// Path as a polyline, or `None` when there is nothing to draw.
    pub fn path_outline(&self) -> Option<BezPath> {
        if self.path.len() < 2 {
            return None;
        }
        let mut outline = BezPath::new();
        outline.move_to(self.path[0]);
        for &p in &self.path[1..] {
            outline.line_to(p);
        }
        Some(outline)
    }
}
