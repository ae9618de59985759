//! Schema-driven form core.
//!
//! A form is described as data ([`FormSchema`]) and turned into controls
//! by pure functions:
//!
//! ```text
//! FormSchema ──→ derive_initial_values ──→ ValueMap
//!     │                                       │
//!     └──→ compose(schema, values, validation) ──→ RenderTree
//!              │
//!              ├─ render_field (registry, per descriptor)
//!              └─ should_show_error (validation bridge)
//! ```
//!
//! Nothing in this module holds state. The host container in
//! [`crate::ui::form`] owns values and validation results and calls
//! back in here once per render pass.

mod control;
mod descriptor;
mod error;
mod initial;
mod orchestrator;
mod registry;
mod rules;
mod validation;

pub use control::{
    CheckboxControl, Control, NoteControl, SelectControl, SelectOption, TextAreaControl,
    TextInputControl, PLACEHOLDER_LABEL, PLACEHOLDER_VALUE,
};
pub use descriptor::{FieldDescriptor, FieldKind, FieldType, FieldValue, FormSchema, ValueMap};
pub use error::SchemaError;
pub use initial::derive_initial_values;
pub use orchestrator::{
    check_schema, compose, RenderTree, RenderedField, SubmitControl, ERROR_BANNER,
};
pub use registry::{render_field, select_options};
pub use rules::{bound_errors, FieldRules, FormRules};
pub use validation::{
    has_visible_errors, should_show_error, FieldErrors, ValidationState, Validator,
};
