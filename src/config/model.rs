// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::types::ScriptDialect;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [plugin]
/// name = "scriptstamp"
/// icon = "icon.svg"
/// install_dir = "addons/scriptstamp"
///
/// [dialect]
/// extension = "gd"
/// declare_keyword = "class_name"
/// inherit_keyword = "extends"
/// comment_prefix = "#"
/// ```
///
/// All sections and fields are optional and default to the values above.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub plugin: PluginSection,

    /// Script language being stamped.
    #[serde(default)]
    pub dialect: ScriptDialect,
}

/// `[plugin]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PluginSection {
    /// Display name shown by the host.
    pub name: String,

    /// Icon resource shown next to the name.
    pub icon: String,

    /// Where the plugin itself is installed, relative to the project root.
    /// Scripts in here are never rewritten.
    pub install_dir: PathBuf,
}

impl Default for PluginSection {
    fn default() -> Self {
        Self {
            name: "scriptstamp".to_string(),
            icon: "icon.svg".to_string(),
            install_dir: PathBuf::from("addons/scriptstamp"),
        }
    }
}
