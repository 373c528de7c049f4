//! Error types for metadata resolution

use thiserror::Error;

/// Result type alias for generation operations
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Error type for generation operations
///
/// Every variant is scoped to a single class: a failing class never prevents
/// the other classes of a run from being generated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The superclass chain loops back onto a class already visited
    #[error("cyclic class hierarchy in {class}: {}", .chain.join(" -> "))]
    CyclicHierarchy { class: String, chain: Vec<String> },

    /// More than one persisted field carries an identifier marker
    #[error("{class} declares more than one identifier field: {first} and {second}")]
    DuplicateIdentifier {
        class: String,
        first: String,
        second: String,
    },

    /// A field name cannot be used as a constant in the generated artifact
    #[error("{class}: field name {name:?} is not a valid constant name")]
    InvalidConstantName { class: String, name: String },

    /// A class of the hierarchy is defined more than once
    #[error("{class}: class {duplicate} is defined more than once")]
    DuplicateClass { class: String, duplicate: String },

    /// The qualified name does not end in a usable simple name
    #[error("invalid class name {0:?}")]
    InvalidClassName(String),

    /// Generator configuration is invalid
    #[error("configuration error: {0}")]
    InvalidConfig(String),
}

impl GenerationError {
    /// Whether this error comes from a malformed class structure
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            GenerationError::CyclicHierarchy { .. }
                | GenerationError::DuplicateIdentifier { .. }
                | GenerationError::InvalidConstantName { .. }
                | GenerationError::DuplicateClass { .. }
                | GenerationError::InvalidClassName(_)
        )
    }

    /// The class this error is attributed to, if any
    pub fn class(&self) -> Option<&str> {
        match self {
            GenerationError::CyclicHierarchy { class, .. }
            | GenerationError::DuplicateIdentifier { class, .. }
            | GenerationError::InvalidConstantName { class, .. }
            | GenerationError::DuplicateClass { class, .. } => Some(class),
            GenerationError::InvalidClassName(class) => Some(class),
            GenerationError::InvalidConfig(_) => None,
        }
    }
}

impl From<toml::de::Error> for GenerationError {
    fn from(err: toml::de::Error) -> Self {
        GenerationError::InvalidConfig(err.to_string())
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        GenerationError::InvalidConfig(err.to_string())
    }
}
