//! Base trait for view state in the MVI layer.

/// Marker trait for view state objects.
///
/// States are owned by exactly one mounted view and:
/// - are replaced wholesale on every transition (Clone to derive new states)
/// - carry everything needed to draw the component
/// - are comparable, so tests can assert exact transitions
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
