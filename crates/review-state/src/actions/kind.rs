//! Action kinds
//!
//! The string form of each kind is the action type the front-end dispatches.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Every action kind the review reducer reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum ActionKind {
    #[strum(serialize = "GET_JOB_SUCCESS")]
    JobLoaded,
    #[strum(serialize = "CHANGE_FRAME_SUCCESS")]
    FrameChanged,
    #[strum(serialize = "SUBMIT_REVIEW_SUCCESS")]
    ReviewSubmitted,
    #[strum(serialize = "INITIALIZE_REVIEW_SUCCESS")]
    ReviewInitialized,
    #[strum(serialize = "START_ISSUE")]
    IssueDraftStarted,
    #[strum(serialize = "FINISH_ISSUE_SUCCESS")]
    IssueDraftFinished,
    #[strum(serialize = "CANCEL_ISSUE")]
    IssueDraftCancelled,
    #[strum(serialize = "RESOLVE_ISSUE_SUCCESS")]
    IssueResolved,
    #[strum(serialize = "REOPEN_ISSUE_SUCCESS")]
    IssueReopened,
    #[strum(serialize = "COMMENT_ISSUE_SUCCESS")]
    IssueCommented,
}

impl ActionKind {
    /// Check if this kind belongs to the job/frame lifecycle namespace
    pub fn is_annotation(&self) -> bool {
        matches!(self, ActionKind::JobLoaded | ActionKind::FrameChanged)
    }
}
