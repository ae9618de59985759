//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are cloned to produce new states, compared to detect changes,
/// and hold everything a render pass needs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
