//! Contact form state (MVI pattern).
//!
//! Fields update one keystroke at a time; validation only runs on submit.
//! Delivery itself happens outside the reducer, see [`crate::submit`].

mod intent;
mod reducer;
mod state;

pub use intent::ContactIntent;
pub use reducer::ContactReducer;
pub use state::{is_plausible_email, ContactForm, FormField, FormStatus};
