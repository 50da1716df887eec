//! Base trait for intents in the MVI layer.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Key presses and mouse wheel events
/// - Timer expirations (typewriter ticks, notice dismissal)
/// - Viewport intersection notifications
/// - Results reported back by the submission worker
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
