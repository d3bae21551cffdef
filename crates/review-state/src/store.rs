use std::sync::mpsc::Receiver;

use review_state_config::ReviewConfig;

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::{LoggingMiddleware, Middleware};
use crate::reducers::reduce_with;
use crate::state::ReviewState;

/// Store - holds the review state and runs the middleware/reducer loop
///
/// Dispatches are processed one at a time. Actions queued by middleware are
/// handled after the action that queued them has been reduced.
pub struct Store {
    state: ReviewState,
    config: ReviewConfig,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    pending: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: ReviewState, config: ReviewConfig) -> Self {
        let (dispatcher, pending) = Dispatcher::channel();
        Self {
            state: initial_state,
            config,
            middleware: Vec::new(),
            dispatcher,
            pending,
        }
    }

    /// Create a store with the middleware enabled by `config`
    pub fn with_default_middleware(initial_state: ReviewState, config: ReviewConfig) -> Self {
        let log_actions = config.log_actions;
        let mut store = Self::new(initial_state, config);
        if log_actions {
            store.add_middleware(Box::new(LoggingMiddleware::new()));
        }
        store
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &ReviewState {
        &self.state
    }

    /// Get the store configuration
    pub fn config(&self) -> &ReviewConfig {
        &self.config
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Process an action through middleware chain and reducer
    pub fn dispatch(&mut self, action: Action) {
        self.process(action);

        // Drain follow-up actions queued by middleware, including the ones
        // queued while draining
        while let Ok(action) = self.pending.try_recv() {
            self.process(action);
        }
    }

    fn process(&mut self, action: Action) {
        let mut should_reduce = true;

        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        if should_reduce {
            let state = std::mem::take(&mut self.state);
            self.state = reduce_with(state, &action, self.config.frame_change_policy);
        }
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("middleware", &format!("{} middleware", self.middleware.len()))
            .finish()
    }
}
