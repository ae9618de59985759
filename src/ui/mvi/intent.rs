//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User input (typing, toggling, moving focus)
/// - Results computed outside the reducer (validation passes)
pub trait Intent: Send + 'static {}
