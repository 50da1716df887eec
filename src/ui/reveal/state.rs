use std::collections::BTreeSet;

use crate::ui::mvi::UiState;

/// Index of an observed region within a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub usize);

pub const DEFAULT_THRESHOLD: f32 = 0.2;

/// Per-region reveal latches for one mounted page.
///
/// Membership only ever grows.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealSet {
    threshold: f32,
    regions: usize,
    revealed: BTreeSet<RegionId>,
}

impl UiState for RevealSet {}

impl Default for RevealSet {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, 0)
    }
}

impl RevealSet {
    pub fn new(threshold: f32, regions: usize) -> Self {
        Self {
            threshold,
            regions,
            revealed: BTreeSet::new(),
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_revealed(&self, region: RegionId) -> bool {
        self.revealed.contains(&region)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    pub(super) fn latch(mut self, region: RegionId) -> Self {
        if region.0 < self.regions {
            self.revealed.insert(region);
        }
        self
    }
}
