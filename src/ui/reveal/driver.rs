use crate::ui::mvi;

use super::observer::{RegionHandle, Viewport, ViewportObserver};
use super::reducer::RevealReducer;
use super::state::{RegionId, RevealSet};

/// Reveal latches of one mounted page plus their viewport subscriptions.
#[derive(Debug)]
pub struct RevealDriver {
    set: RevealSet,
    observer: ViewportObserver,
}

impl RevealDriver {
    pub fn mount(threshold: f32, regions: usize) -> Self {
        Self {
            set: RevealSet::new(threshold, regions),
            observer: ViewportObserver::new(),
        }
    }

    pub fn set(&self) -> &RevealSet {
        &self.set
    }

    pub fn is_revealed(&self, region: RegionId) -> bool {
        self.set.is_revealed(region)
    }

    pub fn is_observing(&self) -> bool {
        self.observer.is_connected()
    }

    /// Refresh subscriptions from the latest layout and latch whatever
    /// crossed the threshold.
    pub fn sync<I>(&mut self, handles: I, viewport: Viewport)
    where
        I: IntoIterator<Item = (RegionId, Option<RegionHandle>)>,
    {
        self.observer.observe(handles);
        for intent in self.observer.intersections(viewport) {
            mvi::dispatch::<RevealReducer>(&mut self.set, intent);
        }
    }

    pub fn unmount(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handles() -> Vec<(RegionId, Option<RegionHandle>)> {
        vec![
            (RegionId(0), Some(RegionHandle { top: 0, height: 4 })),
            (RegionId(1), None),
            (RegionId(2), Some(RegionHandle { top: 40, height: 4 })),
        ]
    }

    #[test]
    fn sync_reveals_regions_on_screen() {
        let mut driver = RevealDriver::mount(0.3, 3);
        driver.sync(handles(), Viewport { offset: 0, height: 10 });
        assert!(driver.is_revealed(RegionId(0)));
        assert!(!driver.is_revealed(RegionId(1)));
        assert!(!driver.is_revealed(RegionId(2)));

        driver.sync(handles(), Viewport { offset: 38, height: 10 });
        assert!(driver.is_revealed(RegionId(0)));
        assert!(driver.is_revealed(RegionId(2)));
    }

    #[test]
    fn unmounted_driver_stops_latching() {
        let mut driver = RevealDriver::mount(0.3, 3);
        driver.unmount();
        driver.sync(handles(), Viewport { offset: 0, height: 100 });
        assert!(!driver.is_observing());
        assert_eq!(driver.set().revealed_count(), 0);
    }
}
