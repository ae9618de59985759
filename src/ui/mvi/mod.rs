//! Model-View-Intent (MVI) primitives for the form container.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ compose ──→ View
//!    ↑                                          │
//!    └──────────── key press ───────────────────┘
//! ```
//!
//! - **State**: values, validation results and focus of a mounted form
//! - **Intent**: edits, focus moves, submit attempts, validation results
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
