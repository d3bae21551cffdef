use review_state_config::FrameChangePolicy;

use crate::actions::Action;
use crate::reducers::{annotation_reducer, review_reducer};
use crate::state::ReviewState;

/// Reducer - pure function that produces new state from current state + action
///
/// Frame changes filter persisted issues only. Use [`reduce_with`] to pick
/// another [`FrameChangePolicy`].
pub fn reduce(state: ReviewState, action: &Action) -> ReviewState {
    reduce_with(state, action, FrameChangePolicy::PersistedOnly)
}

/// Root reducer that routes each action namespace to its sub-reducer
pub fn reduce_with(state: ReviewState, action: &Action, policy: FrameChangePolicy) -> ReviewState {
    match action {
        Action::Annotation(action) => annotation_reducer::reduce_annotation(state, action, policy),
        Action::Review(action) => review_reducer::reduce_review(state, action),
        Action::Unrecognized { .. } | Action::None => state,
    }
}
