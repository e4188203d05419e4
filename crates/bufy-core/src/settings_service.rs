//! Active-section tracking for the settings sidebar.

use bufy_domain::SettingsSection;

pub const SETTINGS_TITLE: &str = "Settings";

/// A sidebar row and whether it matches the current location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsItem {
    pub section: SettingsSection,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsNavigation {
    active_path: String,
}

impl Default for SettingsNavigation {
    fn default() -> Self {
        Self::new(SettingsSection::Profile.path())
    }
}

impl SettingsNavigation {
    pub fn new(active_path: impl Into<String>) -> Self {
        Self {
            active_path: active_path.into(),
        }
    }

    pub fn active_path(&self) -> &str {
        &self.active_path
    }

    pub fn navigate(&mut self, path: impl Into<String>) {
        self.active_path = path.into();
    }

    /// Exact path match; no prefix or trailing-slash normalization.
    pub fn is_active(&self, path: &str) -> bool {
        self.active_path == path
    }

    pub fn active_section(&self) -> Option<SettingsSection> {
        SettingsSection::from_path(&self.active_path)
    }

    pub fn items(&self) -> Vec<SettingsItem> {
        SettingsSection::ALL
            .into_iter()
            .map(|section| SettingsItem {
                section,
                active: self.is_active(section.path()),
            })
            .collect()
    }
}
