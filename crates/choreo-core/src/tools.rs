//! Tool system for the board.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    /// Pick up a dancer and drop it somewhere else.
    #[default]
    Select,
    /// Place new dancers on the grid.
    Add,
    /// Extend a dancer's path by one waypoint per drop.
    Transition,
}

/// What a click on empty board space does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Create a dancer at the snapped pointer position.
    CreateDancer,
    /// Nothing at board level; individual dancers handle their own clicks.
    Delegate,
}

/// What releasing the pointer does to the selected dancer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseAction {
    /// Move the dancer to the drop point.
    Move,
    /// Move the dancer and append the drop point to its path.
    ExtendPath,
}

impl ToolKind {
    /// All tools, in toolbar order.
    pub const ALL: [ToolKind; 3] = [ToolKind::Select, ToolKind::Add, ToolKind::Transition];

    /// Get display name for this tool.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Select => "Select",
            ToolKind::Add => "Add",
            ToolKind::Transition => "Transition",
        }
    }

    pub fn click_action(self) -> ClickAction {
        match self {
            ToolKind::Add => ClickAction::CreateDancer,
            ToolKind::Select | ToolKind::Transition => ClickAction::Delegate,
        }
    }

    pub fn release_action(self) -> ReleaseAction {
        match self {
            ToolKind::Transition => ReleaseAction::ExtendPath,
            ToolKind::Select | ToolKind::Add => ReleaseAction::Move,
        }
    }

    /// Whether a placement preview follows the pointer.
    pub fn shows_preview(self) -> bool {
        self == ToolKind::Add
    }

    /// Whether pressing on a dancer picks it up.
    pub fn picks_up_dancers(self) -> bool {
        matches!(self, ToolKind::Select | ToolKind::Transition)
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a tool name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown tool: {0}")]
pub struct UnknownTool(pub String);

impl FromStr for ToolKind {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolKind::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTool(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tool() {
        assert_eq!(ToolKind::default(), ToolKind::Select);
    }

    #[test]
    fn test_click_actions() {
        assert_eq!(ToolKind::Add.click_action(), ClickAction::CreateDancer);
        assert_eq!(ToolKind::Select.click_action(), ClickAction::Delegate);
        assert_eq!(ToolKind::Transition.click_action(), ClickAction::Delegate);
    }

    #[test]
    fn test_release_actions() {
        assert_eq!(ToolKind::Transition.release_action(), ReleaseAction::ExtendPath);
        assert_eq!(ToolKind::Select.release_action(), ReleaseAction::Move);
    }

    #[test]
    fn test_preview_only_for_add() {
        assert!(ToolKind::Add.shows_preview());
        assert!(!ToolKind::Select.shows_preview());
        assert!(!ToolKind::Transition.shows_preview());
    }

    #[test]
    fn test_parse_tool() {
        assert_eq!("transition".parse::<ToolKind>(), Ok(ToolKind::Transition));
        assert_eq!(" Add ".parse::<ToolKind>(), Ok(ToolKind::Add));
        assert_eq!(
            "lasso".parse::<ToolKind>(),
            Err(UnknownTool("lasso".to_string()))
        );
    }
}
