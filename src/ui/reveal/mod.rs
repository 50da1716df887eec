//! Reveal-on-scroll: regions latch visible the first time enough of them
//! scrolls into the viewport, and stay visible.

mod driver;
mod intent;
mod observer;
mod reducer;
mod state;

pub use driver::RevealDriver;
pub use intent::RevealIntent;
pub use observer::{visible_fraction, RegionHandle, Viewport, ViewportObserver};
pub use reducer::RevealReducer;
pub use state::{RegionId, RevealSet, DEFAULT_THRESHOLD};
