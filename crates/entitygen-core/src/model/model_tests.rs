#![allow(non_snake_case)]

use super::*;
use crate::config::{GeneratorConfig, TablePrefixMode};
use crate::descriptor::{Annotation, FieldDescriptor};

fn id() -> Annotation {
    Annotation::new("jakarta.persistence.Id")
}

fn column(name: &str) -> Annotation {
    Annotation::new("jakarta.persistence.Column").with_value("name", name)
}

fn order_class() -> ClassDescriptor {
    ClassDescriptor::new("com.example.shop.Order")
        .with_annotation(Annotation::new("jakarta.persistence.Entity"))
        .with_annotation(Annotation::new("jakarta.persistence.Table").with_value("name", "orders"))
        .with_annotation(Annotation::new("io.github.dengchen2020.annotation.ColumnTablePrefix"))
        .with_field(FieldDescriptor::new("id").with_annotation(id()).with_doc(" Primary key\n"))
        .with_field(FieldDescriptor::new("userName").with_doc(" Buyer name\n"))
        .with_field(FieldDescriptor::new("createdAt").with_annotation(column("created_time")))
}

fn build_with(classes: Vec<ClassDescriptor>, config: GeneratorConfig, name: &str) -> GenerationResult<ArtifactModel> {
    let ctx = GenerationContext::new(classes, config);
    let class = ctx.get(name).unwrap();
    build(&ctx, class)
}

#[test]
fn build___order_scenario___resolves_prefixed_references() {
    let model = build_with(vec![order_class()], GeneratorConfig::default(), "com.example.shop.Order")
        .unwrap();

    assert_eq!(model.table_name, "orders");
    assert_eq!(model.quoted_table_name, "`orders`");
    assert_eq!(model.class_name, "DcOrder");
    assert_eq!(model.package, "com.example.shop");
    assert_eq!(
        model.all_columns,
        vec![
            "`orders`.`id`",
            "`orders`.`user_name`",
            "`orders`.`created_time`"
        ]
    );
    assert_eq!(model.identifier.as_ref(), Some(&model.entries[0]));
    assert_eq!(
        model.update_columns,
        vec!["`orders`.`user_name`", "`orders`.`created_time`"]
    );
}

#[test]
fn build___order_scenario___names_constants_after_fields() {
    let model = build_with(vec![order_class()], GeneratorConfig::default(), "com.example.shop.Order")
        .unwrap();

    let constants: Vec<&str> = model.entries.iter().map(|e| e.constant_name.as_str()).collect();

    assert_eq!(constants, vec!["id", "userName", "createdAt"]);
    assert_eq!(model.entries[1].doc.as_deref(), Some(" Buyer name\n"));
    assert_eq!(model.entries[2].column_name, "created_time");
}

#[test]
fn build___transient_field___is_absent_from_all_lists() {
    let class = order_class().with_field(
        FieldDescriptor::new("cachedTotal")
            .with_annotation(column("cached_total"))
            .with_annotation(Annotation::new("javax.persistence.Transient")),
    );

    let model = build_with(vec![class], GeneratorConfig::default(), "com.example.shop.Order").unwrap();

    assert!(model.entries.iter().all(|e| e.field_name != "cachedTotal"));
    assert!(model.all_columns.iter().all(|c| !c.contains("cached_total")));
    assert!(model.update_columns.iter().all(|c| !c.contains("cached_total")));
}

#[test]
fn build___no_table_marker___uses_simple_name() {
    let class = ClassDescriptor::new("com.example.Product")
        .with_annotation(Annotation::new("javax.persistence.Entity"))
        .with_field(FieldDescriptor::new("skuCode"));

    let model = build_with(vec![class], GeneratorConfig::default(), "com.example.Product").unwrap();

    assert_eq!(model.table_name, "Product");
    assert_eq!(model.all_columns, vec!["`sku_code`"]);
}

#[test]
fn build___no_identifier___lists_are_equal() {
    let class = ClassDescriptor::new("com.example.Product")
        .with_field(FieldDescriptor::new("skuCode"))
        .with_field(FieldDescriptor::new("price"));

    let model = build_with(vec![class], GeneratorConfig::default(), "com.example.Product").unwrap();

    assert!(model.identifier.is_none());
    assert_eq!(model.all_columns, model.update_columns);
}

#[test]
fn build___table_prefix_never___uses_bare_quoted_columns() {
    let config = GeneratorConfig {
        table_prefix: TablePrefixMode::Never,
        ..GeneratorConfig::default()
    };

    let model = build_with(vec![order_class()], config, "com.example.shop.Order").unwrap();

    assert_eq!(model.all_columns[1], "`user_name`");
}

#[test]
fn build___table_prefix_always___qualifies_unmarked_class() {
    let class = ClassDescriptor::new("com.example.Product").with_field(FieldDescriptor::new("skuCode"));
    let config = GeneratorConfig {
        table_prefix: TablePrefixMode::Always,
        ..GeneratorConfig::default()
    };

    let model = build_with(vec![class], config, "com.example.Product").unwrap();

    assert_eq!(model.all_columns, vec!["`Product`.`sku_code`"]);
}

#[test]
fn build___flat_variant___uses_upper_snake_constants_and_raw_columns() {
    let config = GeneratorConfig {
        variant: OutputVariant::Flat,
        ..GeneratorConfig::default()
    };

    let model = build_with(vec![order_class()], config, "com.example.shop.Order").unwrap();

    let pairs: Vec<(&str, &str)> = model
        .entries
        .iter()
        .map(|e| (e.constant_name.as_str(), e.reference.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("ID", "id"),
            ("USER_NAME", "user_name"),
            ("CREATED_AT", "created_time")
        ]
    );
}

#[test]
fn build___inherited_fields___come_first() {
    let base = ClassDescriptor::new("com.example.BaseEntity")
        .with_annotation(Annotation::new("jakarta.persistence.MappedSuperclass"))
        .with_field(FieldDescriptor::new("id").with_annotation(id()))
        .with_field(FieldDescriptor::new("createTime"));
    let class = ClassDescriptor::new("com.example.Product")
        .with_superclass("com.example.BaseEntity")
        .with_field(FieldDescriptor::new("skuCode"));

    let model = build_with(vec![base, class], GeneratorConfig::default(), "com.example.Product").unwrap();

    assert_eq!(model.all_columns, vec!["`id`", "`create_time`", "`sku_code`"]);
    assert_eq!(model.update_columns, vec!["`create_time`", "`sku_code`"]);
    assert_eq!(
        model.identifier.map(|e| e.declaring_class),
        Some("com.example.BaseEntity".to_string())
    );
}

#[test]
fn build___overriding_field___keeps_the_more_derived_entry() {
    let base = ClassDescriptor::new("com.example.BaseEntity")
        .with_annotation(Annotation::new("jakarta.persistence.MappedSuperclass"))
        .with_field(FieldDescriptor::new("status"))
        .with_field(FieldDescriptor::new("remark"));
    let class = ClassDescriptor::new("com.example.Product")
        .with_superclass("com.example.BaseEntity")
        .with_field(FieldDescriptor::new("status").with_annotation(column("product_status")));

    let model = build_with(vec![base, class], GeneratorConfig::default(), "com.example.Product").unwrap();

    assert_eq!(model.entries.len(), 2);
    assert_eq!(model.all_columns, vec!["`remark`", "`product_status`"]);
    assert_eq!(model.entries[1].declaring_class, "com.example.Product");
}

#[test]
fn build___qualified_with_two_identifier_fields___returns_error() {
    let class = ClassDescriptor::new("com.example.OrderLine")
        .with_field(FieldDescriptor::new("orderId").with_annotation(id()))
        .with_field(
            FieldDescriptor::new("lineNo").with_annotation(Annotation::new("javax.persistence.Id")),
        );

    let err = build_with(vec![class], GeneratorConfig::default(), "com.example.OrderLine").unwrap_err();

    assert_eq!(
        err,
        GenerationError::DuplicateIdentifier {
            class: "com.example.OrderLine".into(),
            first: "orderId".into(),
            second: "lineNo".into(),
        }
    );
}

#[test]
fn build___flat_composite_key___keeps_first_identifier() {
    let class = ClassDescriptor::new("com.example.OrderLine")
        .with_field(FieldDescriptor::new("orderId").with_annotation(id()))
        .with_field(
            FieldDescriptor::new("lineNo").with_annotation(Annotation::new("javax.persistence.Id")),
        )
        .with_field(FieldDescriptor::new("quantity"));
    let config = GeneratorConfig {
        variant: OutputVariant::Flat,
        ..GeneratorConfig::default()
    };

    let model = build_with(vec![class], config, "com.example.OrderLine").unwrap();

    let constants: Vec<&str> = model.entries.iter().map(|e| e.constant_name.as_str()).collect();
    assert_eq!(constants, vec!["ORDER_ID", "LINE_NO", "QUANTITY"]);
    assert_eq!(model.identifier.map(|e| e.field_name), Some("orderId".to_string()));
    assert_eq!(model.entries.iter().filter(|e| e.is_identifier).count(), 1);
}

#[test]
fn build___empty_field_name___returns_invalid_constant_name() {
    let class = ClassDescriptor::new("com.example.Order").with_field(FieldDescriptor::new(""));

    let err = build_with(vec![class], GeneratorConfig::default(), "com.example.Order").unwrap_err();

    assert_eq!(
        err,
        GenerationError::InvalidConstantName {
            class: "com.example.Order".into(),
            name: String::new(),
        }
    );
}

#[test]
fn build___qualified_name_without_simple_name___returns_error() {
    let class = ClassDescriptor::new("com.example.");

    let err = build_with(vec![class], GeneratorConfig::default(), "com.example.").unwrap_err();

    assert_eq!(err, GenerationError::InvalidClassName("com.example.".into()));
}

#[test]
fn build___field_named_like_generated_member___returns_error() {
    let class = ClassDescriptor::new("com.example.Report").with_field(FieldDescriptor::new("tableName"));

    let err = build_with(vec![class], GeneratorConfig::default(), "com.example.Report").unwrap_err();

    assert!(matches!(err, GenerationError::InvalidConstantName { .. }));
}

#[test]
fn build___naming_strategy_marker___selects_transform() {
    let class = ClassDescriptor::new("com.example.Legacy")
        .with_annotation(
            Annotation::new("io.github.dengchen2020.annotation.NamingStrategy")
                .with_value("value", "pascalCase"),
        )
        .with_field(FieldDescriptor::new("userName"));

    let model = build_with(vec![class], GeneratorConfig::default(), "com.example.Legacy").unwrap();

    assert_eq!(model.all_columns, vec!["`UserName`"]);
}

#[test]
fn build___same_input_twice___yields_identical_models() {
    let ctx = GenerationContext::new(vec![order_class()], GeneratorConfig::default());
    let class = ctx.get("com.example.shop.Order").unwrap();

    let first = build(&ctx, class).unwrap();
    let second = build(&ctx, class).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn ArtifactModel___qualified_class_name___joins_package() {
    let model = build_with(vec![order_class()], GeneratorConfig::default(), "com.example.shop.Order")
        .unwrap();

    assert_eq!(model.qualified_class_name(), "com.example.shop.DcOrder");
}
