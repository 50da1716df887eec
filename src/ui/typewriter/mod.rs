//! Typewriter effect for the hero banner.
//!
//! Two-phase state machine (typing, deleting) with a dwell between them,
//! driven by one cancellable scheduler timer per mounted hero.
//!
//! - `role_cycle.rs` - validated role list and tick intervals
//! - `state.rs` - typewriter state
//! - `intent.rs` - timer tick
//! - `reducer.rs` - transitions
//! - `driver.rs` - mount/unmount lifecycle around the scheduler

mod driver;
mod intent;
mod reducer;
mod role_cycle;
mod state;

pub use driver::TypewriterDriver;
pub use intent::TypewriterIntent;
pub use reducer::TypewriterReducer;
pub use role_cycle::{RoleCycle, RoleCycleError, TypewriterTiming, DEFAULT_ROLES};
pub use state::{TypewriterPhase, TypewriterState};
