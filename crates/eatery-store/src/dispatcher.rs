//! Dispatcher for middleware action dispatch
//!
//! When middleware or a spawned effect task needs to emit follow-up actions,
//! it uses the Dispatcher. Dispatched actions go back through the full
//! middleware chain before reaching the reducers.
//!
//! This enables patterns like:
//! - a profile-edit confirmation triggering the catalog user re-stamp
//! - a finished network call delivering its success or failure action

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Handle for sending actions into the store's processing queue
///
/// Clonable and cheap; effect tasks keep their own clone. An action
/// dispatched here re-enters the middleware chain from the beginning, so
/// every middleware can observe and react to it.
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a dispatcher feeding the given action queue
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action for processing
    pub fn dispatch(&self, action: Action) {
        if let Err(err) = self.action_tx.send(action) {
            log::error!("Dispatcher: store is gone, dropping action: {}", err);
        }
    }
}
