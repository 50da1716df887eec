//! Category/status filtering over the fixed content lists.
//!
//! `All` is the wildcard on each axis. Filtering is recomputed on every
//! render; the lists are small and static so nothing is cached.

mod axis;
mod intent;
mod reducer;
mod state;

pub use axis::{Choice, FilterAxis};
pub use intent::FilterIntent;
pub use reducer::FilterReducer;
pub use state::{filter_items, FilterState, Filterable};
