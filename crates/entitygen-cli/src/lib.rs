//! entitygen-cli - Host integration for entitygen
//!
//! Loads class catalogs, renders [`ArtifactModel`](entitygen_core::ArtifactModel)s
//! into Java sources and writes them out, one artifact per entity class.

pub mod catalog;
pub mod codegen;
pub mod emit;
pub mod generate;
pub mod logging;

pub use catalog::Catalog;
pub use emit::{ArtifactEmitter, EmitError, FileEmitter, RenderedArtifact, StdoutEmitter};
pub use generate::{Diagnostic, DiagnosticKind, GenerationReport, generate_all};
