//! entitygen-core - Table and column metadata resolution for entity classes
//!
//! This crate turns persistence-annotated class descriptions into an
//! [`ArtifactModel`]: the table name, one [`ColumnEntry`] per persisted field,
//! the primary key entry and the aggregate column lists. Rendering the model
//! into source code is left to the caller.
//!
//! - [`ClassDescriptor`] / [`FieldDescriptor`] for the input class data
//! - [`GenerationContext`] for looking up superclasses during a run
//! - [`build`] for assembling the model of one entity class
//! - [`GenerationError`] for error handling

mod config;
mod context;
mod descriptor;
mod error;
pub mod filter;
pub mod hierarchy;
pub mod marker;
pub mod model;
pub mod naming;
pub mod resolve;

pub use config::{GeneratorConfig, OutputVariant, TablePrefixMode};
pub use context::GenerationContext;
pub use descriptor::{Annotated, Annotation, ClassDescriptor, FieldDescriptor};
pub use error::{GenerationError, GenerationResult};
pub use hierarchy::{DeclaredField, collect_fields};
pub use marker::{MarkerKind, MarkerValue, find_marker, has_marker};
pub use model::{ArtifactModel, ColumnEntry, build};
pub use naming::NamingStrategy;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Annotated, Annotation, ArtifactModel, ClassDescriptor, ColumnEntry, FieldDescriptor,
        GenerationContext, GenerationError, GenerationResult, GeneratorConfig, MarkerKind,
        NamingStrategy, OutputVariant, TablePrefixMode, build,
    };
}
