use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::ReviewState;

pub mod logging;

pub use logging::LoggingMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
pub trait Middleware {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current review state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &ReviewState, dispatcher: &Dispatcher) -> bool;
}
