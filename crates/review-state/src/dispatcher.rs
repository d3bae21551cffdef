//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to follow an action up with another one, it uses the
//! Dispatcher. Dispatched actions are queued and re-enter the full middleware
//! chain once the current action has been reduced.

use std::sync::mpsc::{Receiver, Sender};

use crate::actions::Action;

/// Dispatcher for sending actions back through the middleware chain
#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher with the action channel
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Create a dispatcher together with the receiving end of its queue
    pub fn channel() -> (Self, Receiver<Action>) {
        let (action_tx, action_rx) = std::sync::mpsc::channel();
        (Self::new(action_tx), action_rx)
    }

    /// Queue an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
