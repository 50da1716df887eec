use std::collections::BTreeMap;

use super::intent::RevealIntent;
use super::state::RegionId;

/// Laid-out extent of a rendered region, in document rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionHandle {
    pub top: usize,
    pub height: usize,
}

/// Rows of the document currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub offset: usize,
    pub height: usize,
}

/// Fraction of `region` inside `viewport`, in `0.0..=1.0`.
pub fn visible_fraction(region: RegionHandle, viewport: Viewport) -> f32 {
    if region.height == 0 {
        return 0.0;
    }
    let start = region.top.max(viewport.offset);
    let end = (region.top + region.height).min(viewport.offset + viewport.height);
    let overlap = end.saturating_sub(start);
    overlap as f32 / region.height as f32
}

/// Viewport subscriptions for the regions of one mounted page.
///
/// Regions without a handle get no subscription. After `disconnect` the
/// observer stays silent for good.
#[derive(Debug)]
pub struct ViewportObserver {
    subscriptions: BTreeMap<RegionId, RegionHandle>,
    connected: bool,
}

impl Default for ViewportObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportObserver {
    pub fn new() -> Self {
        Self {
            subscriptions: BTreeMap::new(),
            connected: true,
        }
    }

    /// Subscribe (or refresh) every region whose handle is attached.
    pub fn observe<I>(&mut self, handles: I)
    where
        I: IntoIterator<Item = (RegionId, Option<RegionHandle>)>,
    {
        if !self.connected {
            return;
        }
        for (region, handle) in handles {
            match handle.filter(|handle| handle.height > 0) {
                Some(handle) => {
                    self.subscriptions.insert(region, handle);
                }
                None => {
                    self.subscriptions.remove(&region);
                }
            }
        }
    }

    pub fn intersections(&self, viewport: Viewport) -> Vec<RevealIntent> {
        if !self.connected {
            return Vec::new();
        }
        self.subscriptions
            .iter()
            .map(|(&region, &handle)| RevealIntent::Intersected {
                region,
                fraction: visible_fraction(handle, viewport),
            })
            .collect()
    }

    pub fn disconnect(&mut self) {
        self.subscriptions.clear();
        self.connected = false;
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }
}
