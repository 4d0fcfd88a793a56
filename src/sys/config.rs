use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::sys::api::DEFAULT_BASE_URL;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_download_directory")]
    pub download_directory: String,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "tubefetch", "tubefetch")
}

fn home_dir() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home)
}

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_download_directory() -> String {
    UserDirs::new()
        .map(|user_dirs| {
            user_dirs
                .video_dir()
                .map(|p| p.join("tubefetch"))
                .unwrap_or_else(|| user_dirs.home_dir().join("Downloads").join("tubefetch"))
        })
        .unwrap_or_else(|| home_dir().join("Videos").join("tubefetch"))
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            download_directory: default_download_directory(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    pub fn get_config_path() -> PathBuf {
        project_dirs()
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| home_dir().join(".tubefetch").join("config.toml"))
    }

    pub fn default_log_path() -> PathBuf {
        project_dirs()
            .map(|proj_dirs| proj_dirs.data_local_dir().join("tubefetch.log"))
            .unwrap_or_else(|| home_dir().join(".tubefetch").join("tubefetch.log"))
    }

    pub fn load() -> Self {
        let path = Self::get_config_path();
        if !path.exists() {
            let config = Self::default();
            // First run: leave a commented file behind for the user to edit.
            let _ = config.save_to(&path);
            return config;
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Self {
        if let Ok(content) = fs::read_to_string(path) {
            if let Ok(config) = toml::from_str(&content) {
                return config;
            }
        }
        Self::default()
    }

    pub fn expand_tilde(path: &str) -> PathBuf {
        if path == "~" {
            return home_dir();
        }
        if let Some(rest) = path.strip_prefix("~/") {
            return home_dir().join(rest);
        }
        PathBuf::from(path)
    }

    pub fn download_dir(&self) -> PathBuf {
        Self::expand_tilde(&self.download_directory)
    }

    pub fn log_path(&self) -> PathBuf {
        self.logging
            .path
            .clone()
            .unwrap_or_else(Self::default_log_path)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut content = String::from("# tubefetch configuration\n\n");

        content.push_str("# Origin of the download backend.\n");
        content.push_str(&format!("api_base_url = {}\n\n", toml::Value::from(self.api_base_url.as_str())));

        content.push_str("# Where downloaded videos are saved. '~' expands to your home directory.\n");
        content.push_str(&format!(
            "download_directory = {}\n\n",
            toml::Value::from(self.download_directory.as_str())
        ));

        content.push_str("[logging]\n");
        content.push_str("# Write a log file (the terminal is owned by the UI).\n");
        content.push_str(&format!("enabled = {}\n", self.logging.enabled));
        if let Some(p) = &self.logging.path {
            content.push_str(&format!(
                "path = {}\n",
                toml::Value::from(p.to_string_lossy().as_ref())
            ));
        }

        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert!(!config.logging.enabled);
        assert_eq!(config.logging.path, None);
    }

    #[test]
    fn partial_file_overrides() {
        let config: Config = toml::from_str(
            "api_base_url = \"http://10.0.0.2:9000\"\n[logging]\nenabled = true\n",
        )
        .unwrap();
        assert_eq!(config.api_base_url, "http://10.0.0.2:9000");
        assert!(config.logging.enabled);
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            api_base_url: "http://example.test".to_string(),
            download_directory: "C:\\Users\\me\\Videos \"quoted\"".to_string(),
            logging: LoggingConfig {
                enabled: true,
                path: Some(dir.path().join("x.log")),
            },
        };
        config.save_to(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# tubefetch configuration"));
        assert_eq!(Config::load_from(&path), config);
    }

    #[test]
    fn invalid_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_base_url = [").unwrap();
        assert_eq!(Config::load_from(&path).api_base_url, "http://localhost:8000");
    }

    #[test]
    fn tilde_expansion() {
        assert_eq!(Config::expand_tilde("/tmp/x"), PathBuf::from("/tmp/x"));
        assert_eq!(Config::expand_tilde("~/Videos"), home_dir().join("Videos"));
        assert_eq!(Config::expand_tilde("~"), home_dir());
    }
}
