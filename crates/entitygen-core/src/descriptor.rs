//! Class and field descriptors handed over by the host toolchain

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A declared annotation: its concrete type name plus string attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Fully qualified annotation type, e.g. `jakarta.persistence.Column`
    #[serde(rename = "type")]
    pub type_name: String,

    /// Attribute values, e.g. `name = "created_time"`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub values: BTreeMap<String, String>,
}

impl Annotation {
    /// Create an annotation without attributes
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            values: BTreeMap::new(),
        }
    }

    /// Add an attribute value
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Get an attribute value
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// An element that carries annotations
pub trait Annotated {
    /// Annotations in declaration order
    fn annotations(&self) -> &[Annotation];
}

/// A field of a class, in declaration order within its class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field identifier
    pub name: String,

    /// Documentation comment, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,

    /// Declared `static`
    #[serde(default, rename = "static")]
    pub is_static: bool,

    /// Declared `final`
    #[serde(default, rename = "final")]
    pub is_final: bool,
}

impl FieldDescriptor {
    /// Create a plain instance field
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            annotations: Vec::new(),
            is_static: false,
            is_final: false,
        }
    }

    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    #[must_use]
    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    #[must_use]
    pub fn with_final(mut self) -> Self {
        self.is_final = true;
        self
    }
}

impl Annotated for FieldDescriptor {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

/// A class as seen by the generator.
///
/// The superclass is referenced by qualified name and resolved through a
/// [`GenerationContext`](crate::GenerationContext); a name the context does
/// not know is treated as the root of the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    /// Fully qualified name, e.g. `com.example.Order`
    pub qualified_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superclass: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDescriptor>,
}

impl ClassDescriptor {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            superclass: None,
            annotations: Vec::new(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_superclass(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Name without the package, e.g. `Order`
    pub fn simple_name(&self) -> &str {
        match self.qualified_name.rsplit_once('.') {
            Some((_, simple)) => simple,
            None => &self.qualified_name,
        }
    }

    /// Package name, empty for the default package
    pub fn package_name(&self) -> &str {
        match self.qualified_name.rsplit_once('.') {
            Some((package, _)) => package,
            None => "",
        }
    }
}

impl Annotated for ClassDescriptor {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}
