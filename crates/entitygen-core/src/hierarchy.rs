//! Superclass chain traversal

use crate::context::GenerationContext;
use crate::descriptor::{ClassDescriptor, FieldDescriptor};
use crate::error::{GenerationError, GenerationResult};
use crate::filter::is_ignored;
use crate::marker::{MarkerKind, has_marker};
use std::collections::HashSet;

/// A persisted field tagged with the class that declares it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclaredField<'a> {
    pub field: &'a FieldDescriptor,
    pub declaring_class: &'a ClassDescriptor,
}

/// Classes contributing fields to `class`, starting with `class` itself and
/// walking up while each superclass carries the mapped-superclass marker.
///
/// A superclass unknown to the context ends the chain. A superclass that was
/// already visited is a cycle and fails with
/// [`GenerationError::CyclicHierarchy`]. A class defined more than once in
/// the context, `class` itself or a superclass, fails with
/// [`GenerationError::DuplicateClass`].
pub fn class_chain<'a>(
    ctx: &'a GenerationContext,
    class: &'a ClassDescriptor,
) -> GenerationResult<Vec<&'a ClassDescriptor>> {
    ensure_unique(ctx, class, class)?;

    let mut chain = vec![class];
    let mut visited = HashSet::from([class.qualified_name.as_str()]);
    let mut current = class;

    while let Some(parent) = ctx.superclass_of(current) {
        ensure_unique(ctx, class, parent)?;
        if !visited.insert(parent.qualified_name.as_str()) {
            let mut names: Vec<String> = chain.iter().map(|c| c.qualified_name.clone()).collect();
            names.push(parent.qualified_name.clone());
            return Err(GenerationError::CyclicHierarchy {
                class: class.qualified_name.clone(),
                chain: names,
            });
        }
        if !has_marker(parent, MarkerKind::MappedSuperclass) {
            tracing::trace!(
                class = %class.qualified_name,
                parent = %parent.qualified_name,
                "superclass is not a mapped superclass, stopping"
            );
            break;
        }
        chain.push(parent);
        current = parent;
    }

    Ok(chain)
}

fn ensure_unique(
    ctx: &GenerationContext,
    class: &ClassDescriptor,
    member: &ClassDescriptor,
) -> GenerationResult<()> {
    if ctx.is_duplicate(&member.qualified_name) {
        return Err(GenerationError::DuplicateClass {
            class: class.qualified_name.clone(),
            duplicate: member.qualified_name.clone(),
        });
    }
    Ok(())
}

/// Collect the persisted fields of a class and its mapped superclasses.
///
/// Fields come root ancestor first, then each subclass down to `class`;
/// within a class declaration order is kept. Ignored fields are skipped.
pub fn collect_fields<'a>(
    ctx: &'a GenerationContext,
    class: &'a ClassDescriptor,
) -> GenerationResult<Vec<DeclaredField<'a>>> {
    let chain = class_chain(ctx, class)?;

    let fields = chain
        .into_iter()
        .rev()
        .flat_map(|declaring_class| {
            declaring_class
                .fields
                .iter()
                .filter(|field| !is_ignored(field))
                .map(move |field| DeclaredField {
                    field,
                    declaring_class,
                })
        })
        .collect();

    Ok(fields)
}
