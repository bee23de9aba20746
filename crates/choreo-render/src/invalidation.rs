//! Redraw bookkeeping driven by board events.
//!
//! A [`RedrawTracker`] subscribes to a board and accumulates [`Damage`]
//! until the view takes it. Pointer movement alone damages nothing; only
//! the preview, the dancers named by an event, or a re-measured surface
//! cause redraws.

use choreo_core::{Board, BoardEvent, DancerId, Subscription};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// What needs to be redrawn since the last frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Damage {
    /// Redraw everything (grid included).
    pub full: bool,
    /// Redraw the placement preview.
    pub hover: bool,
    /// Dancers whose marker or path changed.
    pub dancers: HashSet<DancerId>,
}

impl Damage {
    pub fn is_empty(&self) -> bool {
        !self.full && !self.hover && self.dancers.is_empty()
    }

    fn record(&mut self, event: &BoardEvent) {
        if let Some(id) = event.dancer() {
            self.dancers.insert(id);
            return;
        }
        match event {
            BoardEvent::DimensionsChanged { .. } => self.full = true,
            BoardEvent::HoverChanged { .. } => self.hover = true,
            BoardEvent::SelectionChanged { previous, current } => {
                self.dancers.extend(previous.iter().chain(current.iter()).copied());
            }
            // Tool and coordinate changes only matter through the preview,
            // which announces itself separately.
            _ => {}
        }
    }
}

/// Collects damage from a board's events.
#[derive(Debug)]
pub struct RedrawTracker {
    damage: Rc<RefCell<Damage>>,
    _subscription: Subscription,
}

impl RedrawTracker {
    /// Start tracking a board. The first frame is always a full redraw.
    pub fn attach(board: &mut Board) -> Self {
        let damage = Rc::new(RefCell::new(Damage {
            full: true,
            ..Damage::default()
        }));
        let sink = Rc::clone(&damage);
        let subscription = board.subscribe(move |event| sink.borrow_mut().record(event));
        Self {
            damage,
            _subscription: subscription,
        }
    }

    /// Whether anything needs redrawing.
    pub fn is_dirty(&self) -> bool {
        !self.damage.borrow().is_empty()
    }

    /// Take the accumulated damage, leaving the tracker clean.
    pub fn take(&self) -> Damage {
        std::mem::take(&mut *self.damage.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use choreo_core::{BoardSurface, PointerEvent, ToolKind};
    use kurbo::{Point, Rect};

    fn tracked() -> (BoardSurface, Board, RedrawTracker) {
        let mut board = Board::default();
        let tracker = RedrawTracker::attach(&mut board);
        let mut surface = BoardSurface::new();
        surface.mount(&mut board, Rect::new(0.0, 0.0, 800.0, 600.0));
        surface.handle_pointer_event(&mut board, PointerEvent::Enter);
        tracker.take();
        (surface, board, tracker)
    }

    #[test]
    fn test_first_frame_is_full() {
        let mut board = Board::default();
        let tracker = RedrawTracker::attach(&mut board);
        assert!(tracker.take().full);
        assert!(!tracker.is_dirty());
    }

    #[test]
    fn test_pointer_moves_without_preview_damage_nothing() {
        let (mut surface, mut board, tracker) = tracked();
        board.add_dancer(Point::new(40.0, 40.0));
        tracker.take();

        for x in [10.0, 35.0, 70.0, 130.0] {
            surface.handle_pointer_event(&mut board, PointerEvent::Move { position: Point::new(x, 20.0) });
        }
        assert!(!tracker.is_dirty());
    }

    #[test]
    fn test_preview_moves_damage_hover_only() {
        let (mut surface, mut board, tracker) = tracked();
        board.set_tool(ToolKind::Add);
        tracker.take();

        surface.handle_pointer_event(&mut board, PointerEvent::Move { position: Point::new(61.0, 20.0) });
        let damage = tracker.take();
        assert!(damage.hover);
        assert!(!damage.full);
        assert!(damage.dancers.is_empty());
    }

    #[test]
    fn test_drop_damages_only_that_dancer() {
        let (mut surface, mut board, tracker) = tracked();
        let moved = board.add_dancer(Point::ZERO);
        board.add_dancer(Point::new(200.0, 200.0));
        board.set_selected(Some(moved));
        tracker.take();

        surface.handle_pointer_event(&mut board, PointerEvent::Move { position: Point::new(40.0, 40.0) });
        surface.release(&mut board);

        let damage = tracker.take();
        assert_eq!(damage.dancers, HashSet::from([moved]));
        assert!(!damage.hover);
    }
}
