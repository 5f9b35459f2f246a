//! Event observers.
//!
//! Observers subscribe to a controller and receive every [`ControllerEvent`]
//! synchronously, in firing order. They only see the event record, so they
//! cannot reach back into the controller mid-tick.

use std::cell::RefCell;
use std::rc::Rc;

use utility_events::{ControllerEvent, EventKind};

/// Receives controller notifications.
pub trait EventObserver {
    fn on_event(&mut self, event: &ControllerEvent);
}

/// Collects events in memory.
///
/// Cloning the recorder shares the underlying buffer, so a test can keep one
/// handle and subscribe the other.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Rc<RefCell<Vec<ControllerEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every recorded event.
    pub fn events(&self) -> Vec<ControllerEvent> {
        self.events.borrow().clone()
    }

    /// Returns the kinds of every recorded event, in order.
    pub fn kinds(&self) -> Vec<EventKind> {
        self.events.borrow().iter().map(|e| e.kind).collect()
    }

    /// Returns the kinds recorded during a specific tick.
    pub fn kinds_for_tick(&self, tick: u64) -> Vec<EventKind> {
        self.events
            .borrow()
            .iter()
            .filter(|e| e.tick == tick)
            .map(|e| e.kind)
            .collect()
    }

    /// Counts recorded events of a kind.
    pub fn count(&self, kind: EventKind) -> usize {
        self.events.borrow().iter().filter(|e| e.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl EventObserver for EventRecorder {
    fn on_event(&mut self, event: &ControllerEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

/// Forwards selection changes and faults to `tracing`.
///
/// Per-tick bookkeeping events (updated, pre_compute, found, not_found) are
/// logged at trace level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl EventObserver for TracingObserver {
    fn on_event(&mut self, event: &ControllerEvent) {
        let action = event.action.as_deref().unwrap_or("-");
        match event.kind {
            EventKind::Faulted => {
                tracing::warn!(tick = event.tick, action, "action faulted");
            }
            kind if kind.is_selection_change()
                || matches!(kind, EventKind::Stopped | EventKind::Restarted) =>
            {
                tracing::debug!(tick = event.tick, time = event.time, action, "{}", event.kind);
            }
            _ => {
                tracing::trace!(tick = event.tick, action, "{}", event.kind);
            }
        }
    }
}
