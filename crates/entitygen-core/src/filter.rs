//! Field participation rules

use crate::descriptor::FieldDescriptor;
use crate::marker::{MarkerKind, has_marker};

/// Whether a field is left out of the generated artifact.
///
/// Static fields, `final` fields and fields carrying a transient marker in
/// either vocabulary do not map to a column.
pub fn is_ignored(field: &FieldDescriptor) -> bool {
    field.is_static || field.is_final || has_marker(field, MarkerKind::Transient)
}
