use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Overrides the config file location
pub const CONFIG_ENV: &str = "WODTRACK_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Event poll timeout; also the animation frame interval
    pub tick_rate_ms: u64,
    /// Splash screen duration, 0 skips the splash
    pub splash_ms: u64,
    pub animations: bool,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            splash_ms: 1200,
            animations: true,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".wodtrack"))
    }

    fn config_path() -> Option<PathBuf> {
        if let Ok(path) = env::var(CONFIG_ENV) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Read the config file; `None` when it does not exist
    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Ignoring config {}: {:#}", config_path.display(), e);
                None
            }
        }
    }

    pub fn load_or_default() -> Config {
        Self::load().unwrap_or_default()
    }

    fn load_from(path: &Path) -> anyhow::Result<Option<Config>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    pub fn splash_duration(&self) -> Duration {
        Duration::from_millis(self.splash_ms)
    }

    /// Where logs go: `log_file` or `~/.wodtrack/wodtrack.log`
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| Self::config_dir().map(|dir| dir.join("wodtrack.log")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("wodtrack-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tick_rate(), Duration::from_millis(50));
        assert_eq!(config.splash_duration(), Duration::from_millis(1200));
        assert!(config.animations);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_missing_file_is_none() {
        let path = env::temp_dir().join("wodtrack-does-not-exist.json");
        assert!(Config::load_from(&path).unwrap().is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = scratch_file("partial.json", r#"{ "animations": false, "splash_ms": 0 }"#);
        let config = Config::load_from(&path).unwrap().unwrap();
        assert!(!config.animations);
        assert_eq!(config.splash_ms, 0);
        assert_eq!(config.tick_rate_ms, 50);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = scratch_file("broken.json", "{ tick_rate_ms: ");
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_zero_tick_rate_is_clamped() {
        let config = Config {
            tick_rate_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(1));
    }

    #[test]
    fn test_explicit_log_file_wins() {
        let config = Config {
            log_file: Some(PathBuf::from("/tmp/wod.log")),
            ..Config::default()
        };
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/wod.log")));
    }
}
