//! Sections reachable from the settings sidebar.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SettingsSection {
    Profile,
    Notifications,
    Privacy,
    Help,
}

impl SettingsSection {
    pub const ALL: [SettingsSection; 4] = [
        SettingsSection::Profile,
        SettingsSection::Notifications,
        SettingsSection::Privacy,
        SettingsSection::Help,
    ];

    pub fn path(self) -> &'static str {
        match self {
            SettingsSection::Profile => "/settings-account",
            SettingsSection::Notifications => "/settings-notification",
            SettingsSection::Privacy => "/settings-privacy",
            SettingsSection::Help => "/settings-help",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SettingsSection::Profile => "Profile Settings",
            SettingsSection::Notifications => "Notifications",
            SettingsSection::Privacy => "Privacy and Security",
            SettingsSection::Help => "Help and Support",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.path() == path)
    }
}

impl fmt::Display for SettingsSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
