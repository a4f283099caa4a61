//! Configuration options for a cleaning run.

use crate::geo::BoundingBox;

/// Options controlling which records are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanOptions {
    /// Records outside this box are skipped before normalization.
    pub region: BoundingBox,
}

impl CleanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(mut self, region: BoundingBox) -> Self {
        self.region = region;
        self
    }
}
