//! Artifact model assembly.
//!
//! [`build`] resolves everything the generated artifact needs for one entity
//! class and returns it as an immutable [`ArtifactModel`]. Rendering the model
//! into source text is a separate stage.
//!
//! # Column references
//!
//! | Variant | Table prefix | Reference |
//! |---------|--------------|-----------|
//! | [`OutputVariant::Qualified`] | applies | `` `orders`.`user_name` `` |
//! | [`OutputVariant::Qualified`] | does not apply | `` `user_name` `` |
//! | [`OutputVariant::Flat`] | ignored | `user_name` |

use crate::config::OutputVariant;
use crate::context::GenerationContext;
use crate::descriptor::ClassDescriptor;
use crate::error::{GenerationError, GenerationResult};
use crate::hierarchy::{DeclaredField, collect_fields};
use crate::marker::{MarkerKind, has_marker};
use crate::naming::{NamingStrategy, is_java_identifier, to_upper_snake_case};
use crate::resolve;
use serde::Serialize;

/// Constant holding the quoted table name
pub const TABLE_NAME_CONSTANT: &str = "tableName";

/// Constant aliasing the identifier column reference
pub const IDENTIFIER_CONSTANT: &str = "$$id";

/// List constant with every column reference
pub const ALL_COLUMNS_CONSTANT: &str = "allColumn";

/// List constant with every column reference except the identifier
pub const UPDATE_COLUMNS_CONSTANT: &str = "updateColumns";

const RESERVED_CONSTANTS: [&str; 4] = [
    TABLE_NAME_CONSTANT,
    IDENTIFIER_CONSTANT,
    ALL_COLUMNS_CONSTANT,
    UPDATE_COLUMNS_CONSTANT,
];

/// One generated column constant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnEntry {
    /// Name of the generated constant
    pub constant_name: String,

    /// Source field name
    pub field_name: String,

    /// Resolved column name, unquoted
    pub column_name: String,

    /// Value of the generated constant
    pub reference: String,

    /// Qualified name of the class declaring the field
    pub declaring_class: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,

    pub is_identifier: bool,
}

/// Everything needed to render the artifact of one entity class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactModel {
    /// Qualified name of the entity class
    pub source_class: String,

    /// Package of the entity and of the artifact
    pub package: String,

    /// Simple name of the artifact class
    pub class_name: String,

    pub variant: OutputVariant,

    pub table_name: String,

    pub quoted_table_name: String,

    /// Column constants, root ancestor fields first
    pub entries: Vec<ColumnEntry>,

    pub identifier: Option<ColumnEntry>,

    /// Every column reference, in entry order
    pub all_columns: Vec<String>,

    /// Every column reference except the identifier, in entry order
    pub update_columns: Vec<String>,
}

impl ArtifactModel {
    /// Qualified name of the artifact class
    pub fn qualified_class_name(&self) -> String {
        if self.package.is_empty() {
            self.class_name.clone()
        } else {
            format!("{}.{}", self.package, self.class_name)
        }
    }
}

/// Wrap an identifier in backquotes
pub fn back_quote(identifier: &str) -> String {
    format!("`{identifier}`")
}

/// Build the artifact model of an entity class.
///
/// Fails when the class name is unusable, when the hierarchy is cyclic or
/// reaches a class defined twice, or when a field name cannot become a
/// constant. The qualified variant also fails when more than one persisted
/// field is an identifier; the flat variant has no identifier alias and
/// keeps the first one. When two fields map to the same constant the more
/// derived one is kept.
pub fn build(ctx: &GenerationContext, class: &ClassDescriptor) -> GenerationResult<ArtifactModel> {
    if !is_java_identifier(class.simple_name()) {
        return Err(GenerationError::InvalidClassName(class.qualified_name.clone()));
    }

    let config = ctx.config();
    let variant = config.variant;
    let table_name = resolve::table_name(class);
    let quoted_table_name = back_quote(&table_name);
    let strategy = resolve::naming_strategy(class);
    let prefixed = config
        .table_prefix
        .applies(has_marker(class, MarkerKind::TablePrefix));

    let mut entries: Vec<ColumnEntry> = Vec::new();
    for declared in collect_fields(ctx, class)? {
        let entry = column_entry(class, declared, variant, &table_name, prefixed, strategy)?;

        if let Some(pos) = entries
            .iter()
            .position(|e| e.constant_name == entry.constant_name)
        {
            let shadowed = entries.remove(pos);
            tracing::warn!(
                class = %class.qualified_name,
                constant = %entry.constant_name,
                shadowed = %shadowed.declaring_class,
                kept = %entry.declaring_class,
                "constant name collision, keeping the more derived field"
            );
        }
        entries.push(entry);
    }

    let mut identifier: Option<ColumnEntry> = None;
    for entry in entries.iter_mut().filter(|e| e.is_identifier) {
        let Some(first) = &identifier else {
            identifier = Some(entry.clone());
            continue;
        };
        if variant == OutputVariant::Qualified {
            return Err(GenerationError::DuplicateIdentifier {
                class: class.qualified_name.clone(),
                first: first.field_name.clone(),
                second: entry.field_name.clone(),
            });
        }
        entry.is_identifier = false;
    }

    let all_columns: Vec<String> = entries.iter().map(|e| e.reference.clone()).collect();
    let update_columns: Vec<String> = entries
        .iter()
        .filter(|e| !e.is_identifier)
        .map(|e| e.reference.clone())
        .collect();

    tracing::debug!(
        class = %class.qualified_name,
        table = %table_name,
        columns = all_columns.len(),
        "built artifact model"
    );

    Ok(ArtifactModel {
        source_class: class.qualified_name.clone(),
        package: class.package_name().to_string(),
        class_name: config.artifact_class_name(class.simple_name()),
        variant,
        table_name,
        quoted_table_name,
        entries,
        identifier,
        all_columns,
        update_columns,
    })
}

fn column_entry(
    class: &ClassDescriptor,
    declared: DeclaredField<'_>,
    variant: OutputVariant,
    table_name: &str,
    prefixed: bool,
    strategy: NamingStrategy,
) -> GenerationResult<ColumnEntry> {
    let field = declared.field;
    let column_name = resolve::column_name(field, strategy);

    let (constant_name, reference) = match variant {
        OutputVariant::Flat => (to_upper_snake_case(&field.name), column_name.clone()),
        OutputVariant::Qualified if prefixed => (
            field.name.clone(),
            format!("{}.{}", back_quote(table_name), back_quote(&column_name)),
        ),
        OutputVariant::Qualified => (field.name.clone(), back_quote(&column_name)),
    };

    let reserved = variant == OutputVariant::Qualified
        && RESERVED_CONSTANTS.contains(&constant_name.as_str());
    if reserved || !is_java_identifier(&constant_name) {
        return Err(GenerationError::InvalidConstantName {
            class: class.qualified_name.clone(),
            name: field.name.clone(),
        });
    }

    tracing::debug!(
        class = %class.qualified_name,
        field = %field.name,
        column = %column_name,
        "resolved column"
    );

    Ok(ColumnEntry {
        constant_name,
        field_name: field.name.clone(),
        column_name,
        reference,
        declaring_class: declared.declaring_class.qualified_name.clone(),
        doc: field.doc.clone(),
        is_identifier: has_marker(field, MarkerKind::Id),
    })
}

#[cfg(test)]
#[path = "model/model_tests.rs"]
mod model_tests;
