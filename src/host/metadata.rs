// src/host/metadata.rs

use std::fmt;

use crate::config::model::PluginSection;

/// Static name and icon the host shows in its plugin list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginMetadata {
    pub name: String,
    pub icon: String,
}

impl From<&PluginSection> for PluginMetadata {
    fn from(section: &PluginSection) -> Self {
        Self {
            name: section.name.clone(),
            icon: section.icon.clone(),
        }
    }
}

impl fmt::Display for PluginMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (icon: {})", self.name, self.icon)
    }
}
