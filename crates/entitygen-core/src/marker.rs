//! Logical persistence markers and their concrete annotation vocabularies.
//!
//! Each [`MarkerKind`] resolves through a fixed, ordered list of annotation
//! type names. The legacy `javax.persistence` vocabulary is checked first and
//! `jakarta.persistence` only when the legacy lookup finds nothing.

use crate::descriptor::{Annotated, Annotation};
use crate::naming::NamingStrategy;

/// Logical marker kinds understood by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// Persisted record type, the generation trigger
    Entity,
    /// Table name override
    Table,
    /// Column name override
    Column,
    /// Primary key
    Id,
    /// Excluded from persistence
    Transient,
    /// Parent class whose fields are inherited
    MappedSuperclass,
    /// Qualify column references with the table name
    TablePrefix,
    /// Naming strategy for derived column names
    NamingStrategy,
}

impl MarkerKind {
    /// All marker kinds
    pub const ALL: [MarkerKind; 8] = [
        MarkerKind::Entity,
        MarkerKind::Table,
        MarkerKind::Column,
        MarkerKind::Id,
        MarkerKind::Transient,
        MarkerKind::MappedSuperclass,
        MarkerKind::TablePrefix,
        MarkerKind::NamingStrategy,
    ];

    /// Concrete annotation type names, in lookup priority order
    pub fn vocabulary(&self) -> &'static [&'static str] {
        match self {
            MarkerKind::Entity => &["javax.persistence.Entity", "jakarta.persistence.Entity"],
            MarkerKind::Table => &["javax.persistence.Table", "jakarta.persistence.Table"],
            MarkerKind::Column => &["javax.persistence.Column", "jakarta.persistence.Column"],
            MarkerKind::Id => &["javax.persistence.Id", "jakarta.persistence.Id"],
            MarkerKind::Transient => {
                &["javax.persistence.Transient", "jakarta.persistence.Transient"]
            }
            MarkerKind::MappedSuperclass => &[
                "javax.persistence.MappedSuperclass",
                "jakarta.persistence.MappedSuperclass",
            ],
            MarkerKind::TablePrefix => &["io.github.dengchen2020.annotation.ColumnTablePrefix"],
            MarkerKind::NamingStrategy => &["io.github.dengchen2020.annotation.NamingStrategy"],
        }
    }
}

/// A marker found on an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerValue<'a> {
    pub kind: MarkerKind,
    pub annotation: &'a Annotation,
}

impl<'a> MarkerValue<'a> {
    /// The `name` attribute, if declared and non-empty
    pub fn name(&self) -> Option<&'a str> {
        self.attribute("name")
    }

    /// An attribute value, if declared and non-empty
    pub fn attribute(&self, key: &str) -> Option<&'a str> {
        self.annotation.value(key).filter(|v| !v.is_empty())
    }

    /// The naming strategy carried by a `NamingStrategy` marker.
    ///
    /// The annotation's `value` defaults to `snakeCase`; an unrecognised value
    /// also falls back to the default.
    pub fn naming_strategy(&self) -> NamingStrategy {
        match self.attribute("value") {
            Some(value) => value.parse().unwrap_or_else(|err| {
                tracing::warn!("{err}, using {}", NamingStrategy::default());
                NamingStrategy::default()
            }),
            None => NamingStrategy::default(),
        }
    }
}

/// Find a marker on an element, trying each vocabulary in priority order.
pub fn find_marker<E>(element: &E, kind: MarkerKind) -> Option<MarkerValue<'_>>
where
    E: Annotated + ?Sized,
{
    kind.vocabulary().iter().find_map(|type_name| {
        element
            .annotations()
            .iter()
            .find(|a| a.type_name == *type_name)
            .map(|annotation| MarkerValue { kind, annotation })
    })
}

/// Check whether an element carries a marker in any vocabulary
pub fn has_marker<E>(element: &E, kind: MarkerKind) -> bool
where
    E: Annotated + ?Sized,
{
    find_marker(element, kind).is_some()
}
