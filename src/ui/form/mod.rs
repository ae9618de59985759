//! Form-state container: owns values and validation for one mounted form.

mod host;
mod intent;
mod reducer;
mod state;

pub use host::{FocusTarget, FormHost, SubmitOutcome, SubmitPolicy};
pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormState, MountedForm};
