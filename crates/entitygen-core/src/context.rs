//! Per-run lookup context

use crate::config::GeneratorConfig;
use crate::descriptor::ClassDescriptor;
use crate::marker::{MarkerKind, has_marker};
use std::collections::{HashMap, HashSet};

/// Everything a generation run can look up: the known classes and the
/// generator configuration.
///
/// The context is read-only once built, so it can be shared between threads
/// while classes are generated independently.
#[derive(Debug, Clone, Default)]
pub struct GenerationContext {
    classes: Vec<ClassDescriptor>,
    index: HashMap<String, usize>,
    duplicates: HashSet<String>,
    config: GeneratorConfig,
}

impl GenerationContext {
    /// Build a context from class descriptors.
    ///
    /// Lookups resolve to the first descriptor of a qualified name. Names
    /// defined more than once are remembered so that only the classes whose
    /// hierarchy reaches them fail.
    pub fn new(classes: Vec<ClassDescriptor>, config: GeneratorConfig) -> Self {
        let mut index = HashMap::with_capacity(classes.len());
        let mut duplicates = HashSet::new();
        for (i, class) in classes.iter().enumerate() {
            if index.contains_key(&class.qualified_name) {
                tracing::warn!(class = %class.qualified_name, "class defined more than once");
                duplicates.insert(class.qualified_name.clone());
            } else {
                index.insert(class.qualified_name.clone(), i);
            }
        }

        Self {
            classes,
            index,
            duplicates,
            config,
        }
    }

    /// Look up a class by qualified name
    pub fn get(&self, qualified_name: &str) -> Option<&ClassDescriptor> {
        self.index.get(qualified_name).map(|&i| &self.classes[i])
    }

    /// Whether more than one descriptor carries this qualified name
    pub fn is_duplicate(&self, qualified_name: &str) -> bool {
        self.duplicates.contains(qualified_name)
    }

    /// The superclass of a class, if it is known to this context
    pub fn superclass_of(&self, class: &ClassDescriptor) -> Option<&ClassDescriptor> {
        class.superclass.as_deref().and_then(|name| self.get(name))
    }

    /// All classes, in the order they were supplied
    pub fn classes(&self) -> &[ClassDescriptor] {
        &self.classes
    }

    /// Classes carrying an entity marker, in the order they were supplied
    pub fn entities(&self) -> impl Iterator<Item = &ClassDescriptor> {
        self.classes
            .iter()
            .filter(|class| has_marker(*class, MarkerKind::Entity))
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}
