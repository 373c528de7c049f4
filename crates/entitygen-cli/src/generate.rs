//! Generation run driver.
//!
//! Every entity class is built, rendered and emitted independently. A failure
//! is recorded as a [`Diagnostic`] for that class and the run moves on.

use crate::catalog::Catalog;
use crate::codegen::to_rendered_artifact;
use crate::emit::{ArtifactEmitter, FileEmitter, StdoutEmitter};
use anyhow::{Context, Result};
use entitygen_core::{ClassDescriptor, GenerationContext, GeneratorConfig, OutputVariant};
use std::fmt;
use std::path::{Path, PathBuf};

/// Default configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "entitygen.toml";

/// What went wrong for a class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The class hierarchy or its fields cannot produce a valid artifact
    Structural,
    /// The artifact could not be written
    Emission,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Structural => write!(f, "structural error"),
            DiagnosticKind::Emission => write!(f, "emission error"),
        }
    }
}

/// A failure attributed to one entity class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub class: String,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.class, self.kind, self.message)
    }
}

/// Outcome of a generation run
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Where each generated artifact went
    pub written: Vec<PathBuf>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Build, render and emit the artifact of one class.
pub fn generate_class(
    ctx: &GenerationContext,
    class: &ClassDescriptor,
    emitter: &dyn ArtifactEmitter,
) -> Result<PathBuf, Diagnostic> {
    let model = entitygen_core::build(ctx, class).map_err(|err| Diagnostic {
        class: class.qualified_name.clone(),
        kind: DiagnosticKind::Structural,
        message: err.to_string(),
    })?;

    let artifact = to_rendered_artifact(&model);

    emitter.emit(&artifact).map_err(|err| Diagnostic {
        class: class.qualified_name.clone(),
        kind: DiagnosticKind::Emission,
        message: err.to_string(),
    })
}

/// Generate artifacts for every entity class of the context.
pub fn generate_all(ctx: &GenerationContext, emitter: &dyn ArtifactEmitter) -> GenerationReport {
    let mut report = GenerationReport::default();

    for class in ctx.entities() {
        let _span = tracing::debug_span!("generate", class = %class.qualified_name).entered();

        match generate_class(ctx, class, emitter) {
            Ok(path) => report.written.push(path),
            Err(diagnostic) => {
                tracing::error!(class = %diagnostic.class, kind = %diagnostic.kind, "{}", diagnostic.message);
                report.diagnostics.push(diagnostic);
            }
        }
    }

    report
}

/// Command line overrides for the generator configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<String>,
    pub variant: Option<OutputVariant>,
    pub class_prefix: Option<String>,
}

/// Load the generator configuration and apply command line overrides.
///
/// An explicit config path must exist; otherwise `entitygen.toml` is used
/// when present and the defaults when not.
pub fn load_config(overrides: &ConfigOverrides) -> Result<GeneratorConfig> {
    let mut config = match overrides.config_path.as_deref() {
        Some(path) => read_config(Path::new(path))?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            read_config(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => GeneratorConfig::default(),
    };

    if let Some(variant) = overrides.variant {
        config.variant = variant;
    }
    if let Some(prefix) = &overrides.class_prefix {
        config.class_prefix = prefix.clone();
    }
    config.validate()?;

    Ok(config)
}

/// `.json` files are parsed as JSON, everything else as TOML
fn read_config(path: &Path) -> Result<GeneratorConfig> {
    let content = std::fs::read(path)
        .with_context(|| format!("Failed to read config: {path:?}"))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let config = if is_json {
        GeneratorConfig::from_json(&content)
    } else {
        let content = String::from_utf8(content)
            .with_context(|| format!("Config is not valid UTF-8: {path:?}"))?;
        GeneratorConfig::from_toml_str(&content)
    };

    config.with_context(|| format!("Failed to parse config: {path:?}"))
}

/// Generate command implementation
pub fn run(
    catalog_path: &str,
    output: Option<&str>,
    overrides: &ConfigOverrides,
) -> Result<()> {
    let config = load_config(overrides)?;
    let ctx = Catalog::from_file(catalog_path)?.into_context(config);

    let report = match output {
        Some(output) => generate_all(&ctx, &FileEmitter::new(output)),
        None => generate_all(&ctx, &StdoutEmitter),
    };

    if output.is_some() {
        for path in &report.written {
            println!("✓ {}", path.display());
        }
    }
    for diagnostic in &report.diagnostics {
        eprintln!("✗ {diagnostic}");
    }

    if !report.is_success() {
        anyhow::bail!(
            "{} of {} entity class(es) failed",
            report.diagnostics.len(),
            report.diagnostics.len() + report.written.len()
        );
    }

    Ok(())
}

/// Inspect command implementation: print artifact models as JSON
pub fn inspect(catalog_path: &str, class: Option<&str>, overrides: &ConfigOverrides) -> Result<()> {
    let config = load_config(overrides)?;
    let ctx = Catalog::from_file(catalog_path)?.into_context(config);

    let selected: Vec<&ClassDescriptor> = match class {
        Some(name) => {
            let found = ctx
                .get(name)
                .or_else(|| ctx.classes().iter().find(|c| c.simple_name() == name))
                .with_context(|| format!("Class not found in catalog: {name}"))?;
            vec![found]
        }
        None => ctx.entities().collect(),
    };

    let models = selected
        .into_iter()
        .map(|class| entitygen_core::build(&ctx, class))
        .collect::<Result<Vec<_>, _>>()?;

    println!("{}", serde_json::to_string_pretty(&models)?);
    Ok(())
}
