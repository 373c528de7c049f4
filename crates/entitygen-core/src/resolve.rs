//! Column and table name resolution

use crate::descriptor::{ClassDescriptor, FieldDescriptor};
use crate::marker::{MarkerKind, find_marker};
use crate::naming::{self, NamingStrategy};

/// Resolve the column name of a field.
///
/// A non-empty `name` on the column marker is returned verbatim; otherwise the
/// field name is transformed with `strategy`.
pub fn column_name(field: &FieldDescriptor, strategy: NamingStrategy) -> String {
    match find_marker(field, MarkerKind::Column).and_then(|m| m.name()) {
        Some(name) => name.to_string(),
        None => naming::transform(&field.name, strategy),
    }
}

/// Resolve the table name of a class.
///
/// A non-empty `name` on the table marker is returned verbatim; otherwise the
/// simple class name is used as is.
pub fn table_name(class: &ClassDescriptor) -> String {
    match find_marker(class, MarkerKind::Table).and_then(|m| m.name()) {
        Some(name) => name.to_string(),
        None => class.simple_name().to_string(),
    }
}

/// Naming strategy declared on a class, or the default.
pub fn naming_strategy(class: &ClassDescriptor) -> NamingStrategy {
    find_marker(class, MarkerKind::NamingStrategy)
        .map(|m| m.naming_strategy())
        .unwrap_or_default()
}
