//! Naming convention utilities for column names and constants.
//!
//! # Supported Conversions
//!
//! | Input | Strategy / Function | Output |
//! |-------|---------------------|--------|
//! | `userName` | [`NamingStrategy::SnakeCase`] | `user_name` |
//! | `user_name` | [`NamingStrategy::PascalCase`] | `UserName` |
//! | `userName` | [`NamingStrategy::None`] | `userName` |
//! | `userName` | [`to_upper_snake_case`] | `USER_NAME` |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier transform applied to a field name when no explicit column
/// name is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NamingStrategy {
    /// `userName` becomes `user_name`
    #[default]
    SnakeCase,
    /// `user_name` becomes `UserName`
    PascalCase,
    /// Field name is used unchanged
    None,
}

impl NamingStrategy {
    /// Marker value as written in the `NamingStrategy` annotation
    pub fn as_str(&self) -> &'static str {
        match self {
            NamingStrategy::SnakeCase => "snakeCase",
            NamingStrategy::PascalCase => "pascalCase",
            NamingStrategy::None => "none",
        }
    }
}

impl fmt::Display for NamingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "snakeCase" => Ok(NamingStrategy::SnakeCase),
            "pascalCase" => Ok(NamingStrategy::PascalCase),
            "none" => Ok(NamingStrategy::None),
            other => Err(format!("unknown naming strategy: {other}")),
        }
    }
}

/// Transform an identifier according to a naming strategy.
///
/// # Examples
///
/// ```
/// use entitygen_core::naming::transform;
/// use entitygen_core::NamingStrategy;
///
/// assert_eq!(transform("createdAt", NamingStrategy::SnakeCase), "created_at");
/// assert_eq!(transform("created_at", NamingStrategy::PascalCase), "CreatedAt");
/// assert_eq!(transform("createdAt", NamingStrategy::None), "createdAt");
/// ```
pub fn transform(identifier: &str, strategy: NamingStrategy) -> String {
    match strategy {
        NamingStrategy::SnakeCase => to_snake_case(identifier),
        NamingStrategy::PascalCase => to_pascal_case(identifier),
        NamingStrategy::None => identifier.to_string(),
    }
}

/// Convert camelCase to snake_case.
///
/// Every uppercase character is lowercased and, unless it is the first
/// character, preceded by an underscore. Runs of capitals are not grouped:
/// `userID` becomes `user_i_d`.
///
/// # Examples
///
/// ```
/// use entitygen_core::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("userName"), "user_name");
/// assert_eq!(to_snake_case("Id"), "id");
/// assert_eq!(to_snake_case("address2Line"), "address2_line");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);

    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}

/// Convert a string to PascalCase.
///
/// Handles snake_case, kebab-case, and already-capitalized input.
///
/// # Examples
///
/// ```
/// use entitygen_core::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
/// assert_eq!(to_pascal_case("hello-world"), "HelloWorld");
/// assert_eq!(to_pascal_case("userName"), "UserName");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    s.split(['-', '_']).map(capitalize).collect()
}

/// Convert camelCase to UPPER_SNAKE_CASE, the constant form used by the
/// flat artifact variant.
pub fn to_upper_snake_case(s: &str) -> String {
    to_snake_case(s).to_uppercase()
}

/// Capitalize the first letter of a string.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Java reserved words and literals that cannot name a field.
const JAVA_RESERVED: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "transient", "true", "try", "void", "volatile", "while", "_",
];

/// Check that a string is usable as a Java identifier.
pub fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    if !(first.is_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    if !chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
        return false;
    }

    !JAVA_RESERVED.contains(&s)
}
