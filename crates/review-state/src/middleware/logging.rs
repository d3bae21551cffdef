//! LoggingMiddleware - logs all actions for debugging

use super::{Dispatcher, Middleware};
use crate::{actions::Action, state::ReviewState};

/// LoggingMiddleware - logs all actions that pass through the store
#[derive(Debug, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, state: &ReviewState, _dispatcher: &Dispatcher) -> bool {
        match action {
            Action::None => {}
            Action::Unrecognized { kind } => {
                log::trace!("Action {} ignored by review state", kind);
            }
            _ => {
                log::debug!(
                    "Action {} (issues revision {}): {:?}",
                    action.type_name(),
                    state.issues_revision,
                    action
                );
            }
        }
        // Always continue to next middleware
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ReviewAction;

    #[test]
    fn test_logging_middleware() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut middleware = LoggingMiddleware;
        let (dispatcher, _rx) = Dispatcher::channel();
        let state = ReviewState::default();

        assert!(middleware.handle(
            &Action::Review(ReviewAction::IssueDraftCancelled),
            &state,
            &dispatcher
        ));
        assert!(middleware.handle(&Action::None, &state, &dispatcher));
    }
}
