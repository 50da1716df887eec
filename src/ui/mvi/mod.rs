//! Model-View-Intent (MVI) primitives.
//!
//! Every interactive piece of the portfolio (typewriter, reveal latch,
//! filters, contact form, notices) is a state type plus a pure reducer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: owned by one mounted view, discarded on unmount
//! - **Intent**: key presses, timer expirations, intersection notifications
//! - **Reducer**: pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

/// Run `intent` through reducer `R` against the state stored in `slot`.
pub fn dispatch<R: Reducer>(slot: &mut R::State, intent: R::Intent) {
    *slot = R::reduce(std::mem::take(slot), intent);
}
