use std::fmt;

use serde::Deserialize;

/// Keywords and file extension of the script language being stamped.
///
/// The default is Godot's GDScript:
///
/// ```gdscript
/// class_name PlayerStats
/// extends Node
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScriptDialect {
    /// Watched file extension, without the leading dot.
    pub extension: String,
    /// Keyword introducing the declared type name (`class_name`).
    pub declare_keyword: String,
    /// Keyword introducing the base type (`extends`).
    pub inherit_keyword: String,
    /// Prefix of comment-only lines (`#`).
    pub comment_prefix: String,
}

impl ScriptDialect {
    pub fn gdscript() -> Self {
        Self {
            extension: "gd".to_string(),
            declare_keyword: "class_name".to_string(),
            inherit_keyword: "extends".to_string(),
            comment_prefix: "#".to_string(),
        }
    }

    /// True if the (already trimmed) line opens with the declare keyword.
    pub fn is_declare_line(&self, line: &str) -> bool {
        starts_with_keyword(line, &self.declare_keyword)
    }

    /// True if the (already trimmed) line opens with the inherit keyword.
    pub fn is_inherit_line(&self, line: &str) -> bool {
        starts_with_keyword(line, &self.inherit_keyword)
    }

    pub fn is_comment_line(&self, line: &str) -> bool {
        line.starts_with(&self.comment_prefix)
    }

    /// The line prepended to a freshly created script.
    pub fn declaration_line(&self, identifier: &str) -> String {
        format!("{} {}\n", self.declare_keyword, identifier)
    }
}

impl Default for ScriptDialect {
    fn default() -> Self {
        Self::gdscript()
    }
}

impl fmt::Display for ScriptDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "*.{} ({} / {}, comments '{}')",
            self.extension, self.declare_keyword, self.inherit_keyword, self.comment_prefix
        )
    }
}

/// `line` starts with `keyword` followed by whitespace or the end of line,
/// so `class_name_helper()` is not a declaration.
fn starts_with_keyword(line: &str, keyword: &str) -> bool {
    match line.strip_prefix(keyword) {
        Some(rest) => rest.is_empty() || rest.starts_with(char::is_whitespace),
        None => false,
    }
}
