//! Issue
//!
//! A single annotation comment/flag anchored to a frame of the job.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Index of a frame within an annotation job
pub type Frame = u64;

/// An issue raised against one frame
///
/// Only `frame` is interpreted here. Everything else the server sends
/// (id, position, comments, resolution status) is kept verbatim in
/// `attributes` so it survives a round trip to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Frame the issue is anchored to
    pub frame: Frame,
    /// Opaque issue metadata
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Issue {
    /// Create an issue on `frame` without metadata
    pub fn new(frame: Frame) -> Self {
        Self {
            frame,
            attributes: Map::new(),
        }
    }

    /// Attach an opaque attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Check whether the issue is anchored to `frame`
    pub fn is_on_frame(&self, frame: Frame) -> bool {
        self.frame == frame
    }
}
