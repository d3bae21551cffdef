//! Actions module
//!
//! Actions are tagged by the namespace they come from:
//! - `Annotation`: job and frame lifecycle events
//! - `Review`: review and issue lifecycle events
//!
//! Actions from any other namespace are carried as `Unrecognized` and leave
//! the review state untouched.

pub mod annotation;
pub mod envelope;
pub mod kind;
pub mod review;

pub use annotation::AnnotationAction;
pub use envelope::RawAction;
pub use kind::ActionKind;
pub use review::ReviewAction;

/// Root action enum - tagged by namespace
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Job/frame lifecycle actions
    Annotation(AnnotationAction),
    /// Review/issue lifecycle actions
    Review(ReviewAction),
    /// An action this state slice does not handle, kept by its type name
    Unrecognized { kind: String },
    /// No-op action
    None,
}

impl Action {
    /// The kind of a recognized action
    pub fn kind(&self) -> Option<ActionKind> {
        match self {
            Action::Annotation(action) => Some(action.kind()),
            Action::Review(action) => Some(action.kind()),
            Action::Unrecognized { .. } | Action::None => None,
        }
    }

    /// Type name as the front-end spells it
    pub fn type_name(&self) -> &str {
        match self {
            Action::Unrecognized { kind } => kind,
            Action::None => "NONE",
            _ => self.kind().map(<&'static str>::from).unwrap_or_default(),
        }
    }
}

impl From<AnnotationAction> for Action {
    fn from(action: AnnotationAction) -> Self {
        Action::Annotation(action)
    }
}

impl From<ReviewAction> for Action {
    fn from(action: ReviewAction) -> Self {
        Action::Review(action)
    }
}
