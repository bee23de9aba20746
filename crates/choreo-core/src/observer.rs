//! Change notifications for board views.
//!
//! Mutators on [`Board`](crate::Board) publish a [`BoardEvent`] for every
//! state change. Views register callbacks on the [`EventBus`] and redraw
//! only what the event names.
//!
//! Callbacks are held weakly: the bus keeps a `Weak` handle and the caller
//! keeps the [`Subscription`] guard. Dropping the guard unsubscribes; dead
//! entries are pruned on the next publish.

use crate::dancer::DancerId;
use crate::tools::ToolKind;
use kurbo::{Point, Vec2};
use std::fmt;
use std::rc::{Rc, Weak};

/// A state change on the board.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    /// The surface origin was measured.
    DimensionsChanged { offset: Vec2 },
    /// The snapped pointer position moved to a new grid cell.
    CoordsChanged { rounded: Point },
    /// The placement preview appeared, moved or disappeared.
    HoverChanged { preview: Option<Point> },
    /// The active tool changed.
    ToolChanged { tool: ToolKind },
    /// The selected dancer changed.
    SelectionChanged {
        previous: Option<DancerId>,
        current: Option<DancerId>,
    },
    DancerAdded { id: DancerId },
    /// A dancer's position or path changed.
    DancerChanged { id: DancerId },
    DancerRemoved { id: DancerId },
}

impl BoardEvent {
    /// The dancer this event concerns, if it concerns exactly one.
    pub fn dancer(&self) -> Option<DancerId> {
        match self {
            BoardEvent::DancerAdded { id }
            | BoardEvent::DancerChanged { id }
            | BoardEvent::DancerRemoved { id } => Some(*id),
            _ => None,
        }
    }
}

type CallbackRc = Rc<dyn Fn(&BoardEvent)>;
type CallbackWeak = Weak<dyn Fn(&BoardEvent)>;

/// Guard for a registered callback. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    _callback: CallbackRc,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

/// Publish/subscribe hub for [`BoardEvent`]s.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<CallbackWeak>,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. It is invoked for every event published while
    /// the returned guard is alive.
    pub fn subscribe(&mut self, callback: impl Fn(&BoardEvent) + 'static) -> Subscription {
        let strong: CallbackRc = Rc::new(callback);
        self.subscribers.push(Rc::downgrade(&strong));
        Subscription { _callback: strong }
    }

    /// Deliver an event to live subscribers in registration order.
    pub fn publish(&mut self, event: BoardEvent) {
        self.subscribers.retain(|w| w.strong_count() > 0);
        log::trace!("publish {:?} to {} subscribers", event, self.subscribers.len());
        for callback in self.subscribers.iter().filter_map(Weak::upgrade) {
            callback(&event);
        }
    }

    /// Number of registered subscribers, including dead ones not yet pruned.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn recorder() -> (Rc<RefCell<Vec<BoardEvent>>>, impl Fn(&BoardEvent) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        (log, move |e: &BoardEvent| sink.borrow_mut().push(e.clone()))
    }

    #[test]
    fn test_subscribers_receive_events_in_order() {
        let mut bus = EventBus::new();
        let (log, callback) = recorder();
        let _sub = bus.subscribe(callback);

        bus.publish(BoardEvent::ToolChanged { tool: ToolKind::Add });
        bus.publish(BoardEvent::CoordsChanged { rounded: Point::new(20.0, 0.0) });

        assert_eq!(
            *log.borrow(),
            vec![
                BoardEvent::ToolChanged { tool: ToolKind::Add },
                BoardEvent::CoordsChanged { rounded: Point::new(20.0, 0.0) },
            ]
        );
    }

    #[test]
    fn test_drop_unsubscribes() {
        let mut bus = EventBus::new();
        let (log, callback) = recorder();
        let sub = bus.subscribe(callback);

        bus.publish(BoardEvent::ToolChanged { tool: ToolKind::Add });
        drop(sub);
        bus.publish(BoardEvent::ToolChanged { tool: ToolKind::Select });

        assert_eq!(log.borrow().len(), 1);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_event_dancer() {
        let id = uuid::Uuid::new_v4();
        assert_eq!(BoardEvent::DancerChanged { id }.dancer(), Some(id));
        assert_eq!(BoardEvent::ToolChanged { tool: ToolKind::Add }.dancer(), None);
    }
}
