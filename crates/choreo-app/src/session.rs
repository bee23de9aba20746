//! Recorded pointer sessions.
//!
//! A session is a JSON script: the surface bounds measured at mount time
//! followed by a list of steps, each either a toolbar action or a pointer
//! event in client coordinates.

use choreo_core::{Board, BoardSurface, PointerEvent, ToolKind};
use kurbo::Rect;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One scripted step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Switch the active tool.
    Tool(ToolKind),
    /// Deliver a pointer event to the surface.
    Pointer(PointerEvent),
    /// Label the dancer at an insertion index.
    Label { index: usize, text: String },
}

/// A recorded session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Surface bounds in screen coordinates.
    pub mount: Rect,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Counters from a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub steps: usize,
    /// Pointer events the surface acted on.
    pub handled: usize,
    /// Steps that referred to something that does not exist.
    pub skipped: usize,
}

impl Session {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a session script from disk.
    pub fn load(path: impl AsRef<Path>) -> crate::AppResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&json)?)
    }

    /// Mount the surface and play every step against the board.
    pub fn replay(&self, board: &mut Board, surface: &mut BoardSurface) -> ReplayStats {
        let mut stats = ReplayStats::default();
        surface.mount(board, self.mount);

        for step in &self.steps {
            stats.steps += 1;
            match step {
                Step::Tool(tool) => board.set_tool(*tool),
                Step::Pointer(event) => {
                    if surface.handle_pointer_event(board, *event).is_handled() {
                        stats.handled += 1;
                    }
                }
                Step::Label { index, text } => {
                    let target = board.dancers().ids().get(*index).copied();
                    match target {
                        Some(id) => {
                            board.set_label(id, Some(text.clone()));
                        }
                        None => {
                            log::warn!("No dancer at index {index} to label");
                            stats.skipped += 1;
                        }
                    }
                }
            }
        }
        log::info!(
            "Replayed {} steps ({} pointer events handled, {} skipped)",
            stats.steps,
            stats.handled,
            stats.skipped
        );
        stats
    }
}
