use serde::{Deserialize, Serialize};

/// Where a new issue is being positioned, as a flat list of coordinates
/// (`[x1, y1, x2, y2, ...]` in image space)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionOfInterest {
    pub points: Vec<f64>,
}

impl RegionOfInterest {
    pub fn new(points: Vec<f64>) -> Self {
        Self { points }
    }
}

impl From<Vec<f64>> for RegionOfInterest {
    fn from(points: Vec<f64>) -> Self {
        Self::new(points)
    }
}
