//! Interactive board surface: routes pointer input into board commands.

use crate::board::Board;
use crate::dancer::DancerId;
use crate::input::{EventResponse, MouseButton, PointerEvent};
use crate::mapper::CoordinateMapper;
use crate::tools::{ClickAction, ReleaseAction};
use kurbo::{Point, Rect, Size};

/// Grid layout for drawing the board background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Grid cell edge length.
    pub square_size: f64,
    /// Surface dimensions.
    pub size: Size,
}

/// Result of releasing the pointer while a dancer was selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReleaseOutcome {
    pub id: DancerId,
    pub position: Point,
    pub action: ReleaseAction,
}

/// The rendered board surface.
///
/// The surface owns only mount state; everything else lives on the
/// [`Board`] passed to each call.
#[derive(Debug, Clone, Default)]
pub struct BoardSurface {
    bounds: Option<Rect>,
}

impl BoardSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Measure the surface origin once after it is first laid out.
    ///
    /// Later calls are ignored; use [`remount`](Self::remount) when the
    /// surface has actually moved.
    pub fn mount(&mut self, board: &mut Board, bounds: Rect) -> bool {
        if self.bounds.is_some() {
            log::debug!("Surface already mounted, ignoring bounds {bounds:?}");
            return false;
        }
        self.remount(board, bounds);
        true
    }

    /// Re-measure the surface origin unconditionally.
    pub fn remount(&mut self, board: &mut Board, bounds: Rect) {
        self.bounds = Some(bounds);
        board.change_dimensions(CoordinateMapper::compute_offset(bounds));
    }

    /// Process a pointer event.
    ///
    /// Only the primary button presses and clicks. A release from any
    /// button commits the selected dancer.
    pub fn handle_pointer_event(&mut self, board: &mut Board, event: PointerEvent) -> EventResponse {
        match event {
            PointerEvent::Enter => board.set_pointer_inside(true),
            PointerEvent::Leave => board.set_pointer_inside(false),
            PointerEvent::Move { position } => {
                board.change_coords(position);
            }
            PointerEvent::Down {
                position,
                button: MouseButton::Left,
            } => {
                self.press(board, position);
            }
            PointerEvent::Up { .. } => {
                self.release(board);
            }
            PointerEvent::Click {
                button: MouseButton::Left,
                ..
            } => {
                self.click(board);
            }
            PointerEvent::Down { .. } | PointerEvent::Click { .. } => {
                return EventResponse::ignored();
            }
        }
        EventResponse::handled()
    }

    /// Pick up the dancer under the pointer when the tool allows it.
    pub fn press(&mut self, board: &mut Board, client: Point) -> Option<DancerId> {
        if !board.tool().picks_up_dancers() {
            return None;
        }
        let local = board.mapper().to_board_local(client);
        let id = board.dancer_at(local)?;
        board.set_selected(Some(id));
        Some(id)
    }

    /// Commit the selected dancer at the snapped pointer position.
    ///
    /// With the transition tool the drop point is also appended to the
    /// dancer's path. The selection is cleared either way. Without a
    /// selection this does nothing.
    pub fn release(&mut self, board: &mut Board) -> Option<ReleaseOutcome> {
        let id = board.selected()?;
        let position = board.rounded_coords();
        let action = board.tool().release_action();

        board.move_dancer(id, position);
        if action == ReleaseAction::ExtendPath {
            board.add_path(id, position);
        }
        board.set_selected(None);

        log::debug!("Dropped {id} at ({}, {}) with {action:?}", position.x, position.y);
        Some(ReleaseOutcome { id, position, action })
    }

    /// Apply the active tool's click behavior at the snapped pointer
    /// position. Clicks on the placement preview land here too.
    pub fn click(&mut self, board: &mut Board) -> Option<DancerId> {
        if !board.is_pointer_inside() {
            return None;
        }
        match board.tool().click_action() {
            ClickAction::CreateDancer => Some(board.add_dancer(board.rounded_coords())),
            ClickAction::Delegate => None,
        }
    }

    /// Grid to draw behind the dancers.
    pub fn grid(&self, board: &Board) -> GridSpec {
        GridSpec {
            square_size: board.square_size(),
            size: board.scaled_size(),
        }
    }
}
