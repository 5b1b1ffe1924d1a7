// src/stamp/naming.rs

//! Identifier derivation from script file names.

use std::path::Path;

/// Turn a snake_case file stem into the declared type name.
///
/// The stem is split on `_` and the first character of every segment is
/// upper-cased; the rest of each segment is kept as is. Empty segments
/// (leading, trailing or doubled underscores) contribute nothing.
pub fn derive_identifier(stem: &str) -> String {
    stem.split('_').map(capitalize_first).collect()
}

/// Identifier for the script at `path`, or `None` when the file stem is not
/// valid UTF-8 or yields an empty identifier (e.g. `_.gd`).
///
/// A dotfile such as `.gd` has no stem once its extension is removed, even
/// though `Path::file_stem` reports the whole name.
pub fn identifier_for_path(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    if path.extension().is_none() && stem.starts_with('.') {
        return None;
    }
    let identifier = derive_identifier(stem);
    if identifier.is_empty() {
        None
    } else {
        Some(identifier)
    }
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_identifier_table() {
        let cases = [
            ("player_stats", "PlayerStats"),
            ("enemy", "Enemy"),
            ("_weird__name", "WeirdName"),
            ("trailing_", "Trailing"),
            ("__double_leading", "DoubleLeading"),
            ("ALL_CAPS", "ALLCAPS"),
            ("mixed_CASE_name", "MixedCASEName"),
            ("already_Pascal", "AlreadyPascal"),
            ("2d_sprite", "2dSprite"),
            ("hud_v2", "HudV2"),
            ("élan_vital", "ÉlanVital"),
            ("___", ""),
            ("", ""),
        ];

        for (input, expected) in cases {
            assert_eq!(derive_identifier(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn identifier_uses_the_file_stem() {
        assert_eq!(
            identifier_for_path(Path::new("res/scripts/foo_bar.gd")).as_deref(),
            Some("FooBar")
        );
        assert_eq!(
            identifier_for_path(Path::new("player_stats.ext")).as_deref(),
            Some("PlayerStats")
        );
        assert_eq!(identifier_for_path(Path::new("scripts/_.gd")), None);
        assert_eq!(identifier_for_path(Path::new("./.gd")), None);
        assert_eq!(identifier_for_path(Path::new("scripts/.ext")), None);
    }
}
