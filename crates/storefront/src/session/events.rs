//! Session state-change notifications.

use std::cell::RefCell;
use std::rc::Rc;

use premium_vape_core::{Price, Section};
use serde::Serialize;

/// A change to session state that a front end may need to re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Cart contents changed; carries the recomputed totals.
    CartChanged { count: u32, total: Price },
    /// The cart sheet was opened or closed.
    CartVisibilityChanged { open: bool },
    /// A different section became active.
    SectionChanged { section: Section },
}

/// Receives session events synchronously, in subscription order.
pub trait SessionObserver {
    fn notify(&mut self, event: &SessionEvent);
}

impl<F> SessionObserver for F
where
    F: FnMut(&SessionEvent),
{
    fn notify(&mut self, event: &SessionEvent) {
        self(event);
    }
}

/// Observer that records events for later inspection.
///
/// Clones share the same buffer, so one clone can be subscribed while another
/// is kept by the front end to drain what happened after each command.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<SessionEvent>>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all recorded events, leaving the log empty.
    #[must_use]
    pub fn drain(&self) -> Vec<SessionEvent> {
        self.events.borrow_mut().drain(..).collect()
    }

    /// Copy of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<SessionEvent> {
        self.events.borrow().clone()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl SessionObserver for EventLog {
    fn notify(&mut self, event: &SessionEvent) {
        self.events.borrow_mut().push(*event);
    }
}
