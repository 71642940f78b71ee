//! Mailbox for backend completions.
//!
//! Spawned calls cannot borrow the session, so they post their
//! [`SessionEvent`] here and the frame loop folds the queue into the
//! [`SessionController`] before drawing. Everything runs on the browser's
//! single thread, hence `Rc<RefCell<..>>` rather than a channel.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use talksy_types::event::SessionEvent;

use crate::session::SessionController;

/// Queue of completions shared by every in-flight call. Clones share one queue.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<RefCell<VecDeque<SessionEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    pub fn emit(&self, event: SessionEvent) {
        log::trace!("Queued {:?}", event);
        self.inner.borrow_mut().push_back(event);
    }

    /// Takes every queued event in arrival order.
    pub fn drain(&self) -> Vec<SessionEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }

    /// Feed queued completions into `session` in arrival order and return how
    /// many were applied. Stale ones are still counted; the session drops them.
    pub fn apply_to(&self, session: &mut SessionController) -> usize {
        // Drain first so no borrow is held while the session runs
        let events = self.drain();
        let count = events.len();
        for event in events {
            session.apply(event);
        }
        count
    }

    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
