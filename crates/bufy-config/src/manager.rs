use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{Config, ConfigError};

const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";

/// Reads and writes the budget view preferences file.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Manager for `<base>/config/config.json`; creates the directory.
    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        let dir = base.join(CONFIG_DIR);
        fs::create_dir_all(&dir)?;
        Ok(Self::new(dir.join(CONFIG_FILE)))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Current preferences; a missing file means defaults.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let data = match fs::read_to_string(&self.config_path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(err) => return Err(err.into()),
        };
        serde_json::from_str(&data).map_err(|err| {
            ConfigError::Serde(format!("{}: {}", self.config_path.display(), err))
        })
    }

    /// Writes the whole config; readers never observe a half-written file.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        if let Some(dir) = self.config_path.parent() {
            fs::create_dir_all(dir)?;
        }
        let staging = staging_path(&self.config_path);
        fs::write(&staging, json)?;
        fs::rename(&staging, &self.config_path)?;
        Ok(())
    }
}

/// `config.json` is staged as `.config.json.partial` in the same directory.
fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| CONFIG_FILE.to_string());
    path.with_file_name(format!(".{name}.partial"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staging_file_is_hidden_sibling() {
        assert_eq!(
            staging_path(Path::new("/cfg/config.json")),
            PathBuf::from("/cfg/.config.json.partial")
        );
    }

    #[test]
    fn save_leaves_no_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        manager.save(&Config::default()).unwrap();

        assert!(manager.config_path().exists());
        assert!(!staging_path(manager.config_path()).exists());
    }
}
