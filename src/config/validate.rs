// src/config/validate.rs

use std::path::Component;

use crate::config::model::ConfigFile;
use crate::errors::{Result, StampError};

/// Characters that would turn the extension into something other than a
/// literal glob suffix.
const GLOB_META: &[char] = &['*', '?', '[', ']', '{', '}', '/', '\\'];

/// Run semantic validation against a loaded configuration.
///
/// This checks:
/// - the extension is non-empty, has no leading dot and no glob syntax
/// - both keywords are single non-empty words
/// - the comment prefix is non-empty
/// - the plugin install dir is relative to the project root and names a
///   subdirectory (not the root itself)
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    validate_dialect(cfg)?;
    validate_plugin(cfg)?;
    Ok(())
}

fn validate_dialect(cfg: &ConfigFile) -> Result<()> {
    let dialect = &cfg.dialect;

    if dialect.extension.is_empty() {
        return Err(config_error("[dialect].extension must not be empty"));
    }
    if dialect.extension.starts_with('.') {
        return Err(config_error(format!(
            "[dialect].extension must not start with a dot (got '{}')",
            dialect.extension
        )));
    }
    if dialect.extension.contains(GLOB_META) {
        return Err(config_error(format!(
            "[dialect].extension must be a plain suffix (got '{}')",
            dialect.extension
        )));
    }

    for (field, keyword) in [
        ("declare_keyword", &dialect.declare_keyword),
        ("inherit_keyword", &dialect.inherit_keyword),
    ] {
        if keyword.is_empty() || keyword.contains(char::is_whitespace) {
            return Err(config_error(format!(
                "[dialect].{field} must be a single word (got '{keyword}')"
            )));
        }
    }

    if dialect.comment_prefix.trim().is_empty() {
        return Err(config_error("[dialect].comment_prefix must not be empty"));
    }

    Ok(())
}

fn validate_plugin(cfg: &ConfigFile) -> Result<()> {
    if cfg.plugin.install_dir.is_absolute() {
        return Err(config_error(format!(
            "[plugin].install_dir must be relative to the project root (got {:?})",
            cfg.plugin.install_dir
        )));
    }
    // Empty or `.` would put every script under the excluded directory.
    if cfg
        .plugin
        .install_dir
        .components()
        .all(|c| matches!(c, Component::CurDir))
    {
        return Err(config_error(format!(
            "[plugin].install_dir must name a subdirectory of the project root (got {:?})",
            cfg.plugin.install_dir
        )));
    }
    Ok(())
}

fn config_error(msg: impl Into<String>) -> StampError {
    StampError::ConfigError(msg.into())
}
