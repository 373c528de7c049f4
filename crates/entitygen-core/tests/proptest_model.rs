//! Property-based tests for name derivation and model assembly
//!
//! Covers the naming transforms, root-first field ordering across mapped
//! superclass chains, and the relationship between the column lists.

use entitygen_core::naming::transform;
use entitygen_core::{
    Annotation, ClassDescriptor, FieldDescriptor, GenerationContext, GeneratorConfig,
    NamingStrategy, build, collect_fields,
};
use proptest::prelude::*;

// Strategy: camelCase identifiers such as `userName` or `a1B2`
fn arb_camel_identifier() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,6}([A-Z][a-z0-9]{0,6}){0,4}"
}

// Strategy: field name plus its kind (0 persisted, 1 static, 2 final, 3 transient)
fn arb_field() -> impl Strategy<Value = (String, u8)> {
    (arb_camel_identifier(), 0u8..4)
}

fn field_from(name: &str, kind: u8) -> FieldDescriptor {
    let field = FieldDescriptor::new(name);
    match kind {
        1 => field.with_static(),
        2 => field.with_final(),
        3 => field.with_annotation(Annotation::new("jakarta.persistence.Transient")),
        _ => field,
    }
}

/// Build a mapped-superclass chain `Level0 <- Level1 <- ... <- Entity`, prefixing
/// field names with their level so they never collide.
fn chain(levels: &[Vec<(String, u8)>]) -> Vec<ClassDescriptor> {
    let depth = levels.len();
    levels
        .iter()
        .enumerate()
        .map(|(level, fields)| {
            let mut class = ClassDescriptor::new(format!("com.example.Level{level}"));
            if level + 1 < depth {
                class = class.with_annotation(Annotation::new("javax.persistence.MappedSuperclass"));
            } else {
                class = class.with_annotation(Annotation::new("jakarta.persistence.Entity"));
            }
            if level > 0 {
                class = class.with_superclass(format!("com.example.Level{}", level - 1));
            }
            for (i, (name, kind)) in fields.iter().enumerate() {
                class = class.with_field(field_from(&format!("l{level}f{i}{name}"), *kind));
            }
            class
        })
        .collect()
}

proptest! {
    /// Property: the `none` strategy is the identity on alphanumeric identifiers
    #[test]
    fn proptest_none_strategy_is_identity(s in "[A-Za-z0-9]{0,24}") {
        prop_assert_eq!(transform(&s, NamingStrategy::None), s);
    }

    /// Property: snake case adds one underscore per interior capital and no capitals remain
    #[test]
    fn proptest_snake_case_underscores_interior_capitals(s in arb_camel_identifier()) {
        let result = transform(&s, NamingStrategy::SnakeCase);
        let interior_capitals = s.chars().skip(1).filter(|c| c.is_ascii_uppercase()).count();

        prop_assert!(!result.starts_with('_'));
        prop_assert!(!result.chars().any(|c| c.is_uppercase()));
        prop_assert_eq!(result.matches('_').count(), interior_capitals);
        prop_assert_eq!(result.len(), s.len() + interior_capitals);
    }

    /// Property: PascalCase identifiers round-trip through the pascal strategy
    #[test]
    fn proptest_pascal_case_round_trips(s in "[A-Z][a-z0-9]{0,6}([A-Z][a-z0-9]{0,6}){0,3}") {
        prop_assert_eq!(transform(&s, NamingStrategy::PascalCase), s);
    }

    /// Property: fields of a mapped chain come root first and only persisted ones count
    #[test]
    fn proptest_collect_fields_is_root_first(
        levels in prop::collection::vec(prop::collection::vec(arb_field(), 0..5), 1..5),
    ) {
        let classes = chain(&levels);
        let leaf = classes[classes.len() - 1].qualified_name.clone();
        let ctx = GenerationContext::new(classes, GeneratorConfig::default());
        let class = ctx.get(&leaf).unwrap();

        let fields = collect_fields(&ctx, class).unwrap();

        let expected: usize = levels
            .iter()
            .map(|fields| fields.iter().filter(|(_, kind)| *kind == 0).count())
            .sum();
        prop_assert_eq!(fields.len(), expected);

        let declaring_levels: Vec<&str> = fields
            .iter()
            .map(|f| f.declaring_class.qualified_name.as_str())
            .collect();
        let mut sorted = declaring_levels.clone();
        sorted.sort();
        prop_assert_eq!(declaring_levels, sorted);
    }

    /// Property: update columns are all columns minus at most the identifier
    #[test]
    fn proptest_update_columns_drop_only_the_identifier(
        names in prop::collection::vec(arb_camel_identifier(), 1..8),
        id_index in prop::option::of(0usize..8),
    ) {
        let mut class = ClassDescriptor::new("com.example.Entity");
        for (i, name) in names.iter().enumerate() {
            let mut field = FieldDescriptor::new(format!("f{i}{name}"));
            if id_index == Some(i) {
                field = field.with_annotation(Annotation::new("javax.persistence.Id"));
            }
            class = class.with_field(field);
        }
        let ctx = GenerationContext::new(vec![class], GeneratorConfig::default());
        let class = ctx.get("com.example.Entity").unwrap();

        let model = build(&ctx, class).unwrap();

        let has_id = id_index.is_some_and(|i| i < names.len());
        prop_assert_eq!(model.identifier.is_some(), has_id);
        prop_assert_eq!(
            model.all_columns.len() - model.update_columns.len(),
            usize::from(has_id)
        );
        let without_id: Vec<String> = model
            .all_columns
            .iter()
            .filter(|c| model.identifier.as_ref().is_none_or(|id| &id.reference != *c))
            .cloned()
            .collect();
        prop_assert_eq!(&model.update_columns, &without_id);

        let again = build(&ctx, class).unwrap();
        prop_assert_eq!(model, again);
    }
}
