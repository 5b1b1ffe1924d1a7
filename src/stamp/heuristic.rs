// src/stamp/heuristic.rs

//! "Does this look like an editor-generated stub?" content check.

use crate::types::ScriptDialect;

/// A stub has at most this many significant lines.
pub const MAX_STUB_LINES: usize = 3;

/// Line statistics of a script, ignoring blank and comment-only lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentShape {
    pub non_empty_lines: usize,
    pub has_inherit_line: bool,
    pub has_declare_line: bool,
}

impl ContentShape {
    pub fn of(text: &str, dialect: &ScriptDialect) -> Self {
        let mut shape = ContentShape::default();
        for line in text.lines().map(str::trim) {
            if line.is_empty() || dialect.is_comment_line(line) {
                continue;
            }
            shape.non_empty_lines += 1;
            if dialect.is_inherit_line(line) {
                shape.has_inherit_line = true;
            }
            if dialect.is_declare_line(line) {
                shape.has_declare_line = true;
            }
        }
        shape
    }

    /// Empty, or a short script without a declared type name.
    pub fn looks_freshly_created(&self) -> bool {
        self.non_empty_lines == 0
            || (self.non_empty_lines <= MAX_STUB_LINES && !self.has_declare_line)
    }
}

pub fn looks_freshly_created(text: &str, dialect: &ScriptDialect) -> bool {
    ContentShape::of(text, dialect).looks_freshly_created()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gd() -> ScriptDialect {
        ScriptDialect::gdscript()
    }

    #[test]
    fn empty_and_comment_only_files_are_fresh() {
        assert!(looks_freshly_created("", &gd()));
        assert!(looks_freshly_created("\n   \n\t\n", &gd()));
        assert!(looks_freshly_created("# TODO\n## docs\n", &gd()));
    }

    #[test]
    fn three_lines_without_declaration_are_fresh() {
        let text = "extends Node\n\nfunc _ready():\n\tpass\n";
        let shape = ContentShape::of(text, &gd());
        assert_eq!(shape.non_empty_lines, 3);
        assert!(shape.has_inherit_line);
        assert!(!shape.has_declare_line);
        assert!(shape.looks_freshly_created());
    }

    #[test]
    fn four_lines_are_not_fresh() {
        let text = "extends Node\nvar hp = 3\nfunc _ready():\n\tpass\n";
        assert!(!looks_freshly_created(text, &gd()));
    }

    #[test]
    fn declaration_present_is_not_fresh() {
        assert!(!looks_freshly_created("class_name Foo\n", &gd()));
        assert!(!looks_freshly_created("  class_name Foo\nextends Node\n", &gd()));
    }

    #[test]
    fn crlf_and_indentation_are_trimmed() {
        let shape = ContentShape::of("\r\n  extends Node  \r\n# c\r\n", &gd());
        assert_eq!(shape.non_empty_lines, 1);
        assert!(shape.has_inherit_line);
    }
}
