//! Pointer input types delivered to the board surface.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

/// Pointer event in client (screen) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// The pointer entered the surface.
    Enter,
    /// The pointer left the surface.
    Leave,
    Move {
        position: Point,
    },
    Down {
        position: Point,
        #[serde(default)]
        button: MouseButton,
    },
    Up {
        position: Point,
        #[serde(default)]
        button: MouseButton,
    },
    /// A press and release on the same spot, delivered after `Up`.
    Click {
        position: Point,
        #[serde(default)]
        button: MouseButton,
    },
}

/// What the host should do with the native event after the surface saw it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// Suppress native drag and text selection.
    pub prevent_default: bool,
    /// Keep the event from reaching enclosing elements.
    pub stop_propagation: bool,
}

impl EventResponse {
    /// The surface consumed the event.
    pub fn handled() -> Self {
        Self {
            prevent_default: true,
            stop_propagation: true,
        }
    }

    /// The surface did not act on the event.
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn is_handled(&self) -> bool {
        self.prevent_default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_default_button() {
        let event: PointerEvent =
            serde_json::from_str(r#"{"Click": {"position": {"x": 40.0, "y": 60.0}}}"#).unwrap();
        assert_eq!(
            event,
            PointerEvent::Click {
                position: Point::new(40.0, 60.0),
                button: MouseButton::Left,
            }
        );
        let enter: PointerEvent = serde_json::from_str(r#""Enter""#).unwrap();
        assert_eq!(enter, PointerEvent::Enter);
    }

    #[test]
    fn test_responses() {
        assert!(EventResponse::handled().is_handled());
        assert!(EventResponse::handled().stop_propagation);
        assert!(!EventResponse::ignored().is_handled());
    }
}
