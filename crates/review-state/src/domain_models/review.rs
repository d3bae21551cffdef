//! Review

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Issue;

/// A collection of issues submitted against a job
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Review {
    /// Issues raised in this review
    #[serde(default)]
    pub issues: Vec<Issue>,
    /// Opaque review metadata (id, reviewer, estimated quality, status)
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// A review that is still being written and only lives in memory
pub type ActiveReview = Review;

impl Review {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self {
            issues,
            attributes: Map::new(),
        }
    }

    /// Attach an opaque attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}
