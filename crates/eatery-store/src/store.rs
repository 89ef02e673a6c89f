//! Store - owns application state and runs the action loop
//!
//! There is no ambient global store; embedders own a `Store` value and feed
//! it actions. Every dispatch runs the middleware chain, then the reducers,
//! then whatever follow-up actions the chain queued, strictly in order.
//! Results of asynchronous work arrive through the same queue and are
//! applied by `pump`.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::{ApiMiddleware, LoggingMiddleware, Middleware, ProfileSyncMiddleware};
use crate::reducers::reduce;
use crate::state::AppState;
use eatery_client::EateryApi;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::time::Duration;

/// Store - holds application state and manages the action loop
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    pending_rx: Receiver<Action>,
}

impl Store {
    /// Create a store with no middleware
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, pending_rx) = channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            pending_rx,
        }
    }

    /// Store wired with the standard chain: action logging, the API effect
    /// runner, and profile-edit propagation into the catalog.
    pub fn with_default_middleware(api: Arc<dyn EateryApi>) -> Self {
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(LoggingMiddleware::new()));
        store.add_middleware(Box::new(ApiMiddleware::new(api)));
        store.add_middleware(Box::new(ProfileSyncMiddleware::new()));
        store
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the dispatcher
    ///
    /// Clones of this handle feed actions into the store's queue; `pump`
    /// applies them.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Process an action through the middleware chain and reducers
    pub fn dispatch(&mut self, action: Action) {
        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        // If no middleware consumed the action, apply it
        if should_reduce {
            self.state = reduce(std::mem::take(&mut self.state), &action);
        }

        // Process follow-up actions queued by middleware, in dispatch order
        while let Ok(follow_up) = self.pending_rx.try_recv() {
            self.dispatch(follow_up);
        }
    }

    /// Apply actions that arrived from asynchronous tasks since the last
    /// call; returns how many top-level actions were processed.
    pub fn pump(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(action) = self.pending_rx.try_recv() {
            self.dispatch(action);
            processed += 1;
        }
        processed
    }

    /// Wait up to `timeout` for one asynchronous action, then drain the
    /// queue; returns how many top-level actions were processed.
    pub fn pump_blocking(&mut self, timeout: Duration) -> usize {
        match self.pending_rx.recv_timeout(timeout) {
            Ok(action) => {
                self.dispatch(action);
                1 + self.pump()
            }
            Err(_) => 0,
        }
    }
}
