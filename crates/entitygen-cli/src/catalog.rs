//! Class catalog parsing and validation

use anyhow::{Context, Result};
use entitygen_core::{ClassDescriptor, GenerationContext, GeneratorConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Catalog file structure: the classes visible to one generation run.
///
/// ```toml
/// [[class]]
/// qualified_name = "com.example.Order"
/// superclass = "com.example.BaseEntity"
/// annotations = [
///     { type = "jakarta.persistence.Entity" },
///     { type = "jakarta.persistence.Table", values = { name = "orders" } },
/// ]
///
/// [[class.fields]]
/// name = "userName"
/// doc = "Buyer name"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, rename = "class")]
    pub classes: Vec<ClassDescriptor>,
}

impl Catalog {
    /// Load a catalog from a file; `.json` files are parsed as JSON,
    /// everything else as TOML
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog: {path:?}"))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Parse catalog from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse catalog")
    }

    /// Parse catalog from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse catalog")
    }

    /// Turn the catalog into a generation context.
    ///
    /// Malformed classes are not rejected here: each entity reports its own
    /// problems when it is built, so the rest of the catalog still generates.
    pub fn into_context(self, config: GeneratorConfig) -> GenerationContext {
        GenerationContext::new(self.classes, config)
    }
}

/// Check command implementation
pub fn check(catalog_path: &str) -> Result<()> {
    println!("Checking catalog: {}", catalog_path);

    let catalog = Catalog::from_file(catalog_path)?;
    let class_count = catalog.classes.len();
    let ctx = catalog.into_context(GeneratorConfig::default());

    let mut failures = 0;
    let mut entity_count = 0;
    for class in ctx.entities() {
        entity_count += 1;
        if let Err(err) = entitygen_core::build(&ctx, class) {
            failures += 1;
            println!("✗ {}: {}", class.qualified_name, err);
        }
    }

    println!("✓ Classes: {}", class_count);
    println!("✓ Entities: {}", entity_count);

    if failures > 0 {
        anyhow::bail!("{failures} entity class(es) cannot be generated");
    }
    println!("\nCatalog is valid!");

    Ok(())
}
