use thiserror::Error;

/// A descriptor that breaks its renderer's contract.
///
/// Fatal to the offending field only; siblings keep rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("Field '{field}' is a select without options (`data`)")]
    MissingOptions { field: String },

    #[error("Field '{field}' is a component without a `component` control")]
    MissingComponent { field: String },

    #[error("Field '{field}' lists the placeholder value among its options")]
    PlaceholderCollision { field: String },

    #[error("Field name '{field}' is used more than once")]
    DuplicateName { field: String },
}

impl SchemaError {
    pub fn field(&self) -> &str {
        match self {
            Self::MissingOptions { field }
            | Self::MissingComponent { field }
            | Self::PlaceholderCollision { field }
            | Self::DuplicateName { field } => field,
        }
    }
}
