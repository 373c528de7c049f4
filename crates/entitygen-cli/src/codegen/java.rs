//! Java source generation from artifact models.

use crate::emit::RenderedArtifact;
use entitygen_core::model::{
    ALL_COLUMNS_CONSTANT, IDENTIFIER_CONSTANT, TABLE_NAME_CONSTANT, UPDATE_COLUMNS_CONSTANT,
};
use entitygen_core::{ArtifactModel, ColumnEntry, OutputVariant};
use std::path::PathBuf;

const INDENT: &str = "    ";

/// Render a model and pair it with its output location.
pub fn to_rendered_artifact(model: &ArtifactModel) -> RenderedArtifact {
    let mut relative_path = PathBuf::new();
    for segment in model.package.split('.').filter(|s| !s.is_empty()) {
        relative_path.push(segment);
    }
    relative_path.push(format!("{}.java", model.class_name));

    RenderedArtifact {
        source_class: model.source_class.clone(),
        class_name: model.qualified_class_name(),
        relative_path,
        source: render_java(model),
    }
}

/// Generate the Java class for an artifact model.
pub fn render_java(model: &ArtifactModel) -> String {
    let mut code = String::new();

    // Package declaration
    if !model.package.is_empty() {
        code.push_str(&format!("package {};\n\n", model.package));
    }

    // Imports
    if model.variant == OutputVariant::Qualified {
        code.push_str("import java.util.Arrays;\n");
        code.push_str("import java.util.List;\n\n");
    }

    // Class documentation
    push_doc(&mut code, "", &format!("Generated from {}", model.source_class));
    code.push_str(&format!("public class {} {{\n", model.class_name));

    match model.variant {
        OutputVariant::Qualified => push_qualified_members(&mut code, model),
        OutputVariant::Flat => {
            for entry in &model.entries {
                push_entry(&mut code, entry);
            }
        }
    }

    code.push_str("\n}\n");
    code
}

fn push_qualified_members(code: &mut String, model: &ArtifactModel) {
    code.push('\n');
    push_doc(code, INDENT, "Table name");
    push_string_constant(code, TABLE_NAME_CONSTANT, &model.quoted_table_name);

    for entry in &model.entries {
        push_entry(code, entry);

        if entry.is_identifier {
            code.push('\n');
            push_doc(code, INDENT, "Primary key column");
            push_string_constant(code, IDENTIFIER_CONSTANT, &entry.reference);
        }
    }

    code.push('\n');
    push_doc(code, INDENT, "All columns");
    push_list_constant(code, ALL_COLUMNS_CONSTANT, &model.all_columns);

    code.push('\n');
    push_doc(code, INDENT, "Columns to update, all columns except the primary key");
    push_list_constant(code, UPDATE_COLUMNS_CONSTANT, &model.update_columns);
}

fn push_entry(code: &mut String, entry: &ColumnEntry) {
    code.push('\n');
    if let Some(doc) = entry.doc.as_deref() {
        push_doc(code, INDENT, doc);
    }
    push_string_constant(code, &entry.constant_name, &entry.reference);
}

fn push_string_constant(code: &mut String, name: &str, value: &str) {
    code.push_str(&format!(
        "{INDENT}public static final String {} = \"{}\";\n",
        name,
        escape_java_string(value)
    ));
}

fn push_list_constant(code: &mut String, name: &str, values: &[String]) {
    let items = values
        .iter()
        .map(|v| format!("\"{}\"", escape_java_string(v)))
        .collect::<Vec<_>>()
        .join(", ");
    code.push_str(&format!(
        "{INDENT}public static final List<String> {} = Arrays.asList({});\n",
        name, items
    ));
}

/// Write a Javadoc block, skipping blank documentation entirely.
fn push_doc(code: &mut String, indent: &str, doc: &str) {
    let lines: Vec<&str> = doc.lines().map(str::trim).collect();
    let start = lines.iter().position(|l| !l.is_empty());
    let end = lines.iter().rposition(|l| !l.is_empty());
    let (Some(start), Some(end)) = (start, end) else {
        return;
    };

    code.push_str(&format!("{indent}/**\n"));
    for line in &lines[start..=end] {
        if line.is_empty() {
            code.push_str(&format!("{indent} *\n"));
        } else {
            code.push_str(&format!("{indent} * {}\n", escape_doc_line(line)));
        }
    }
    code.push_str(&format!("{indent} */\n"));
}

/// Keep doc text from closing the comment or forming a unicode escape,
/// which javac translates before lexing comments.
fn escape_doc_line(line: &str) -> String {
    line.replace("*/", "*&#47;").replace("\\u", "&#92;u")
}

/// Escape a value for use inside a Java string literal.
fn escape_java_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}
