/// Application settings
///
/// The browser version of this widget posted to a same-origin relative
/// path; a desktop client needs the service's address. It is resolved in
/// order: the `IMAGE_ANALYZER_SERVER` environment variable, then the
/// settings file in the user's config directory, then the built-in
/// default (the service's local development bind).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default analysis service address
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Environment variable overriding the service address
const SERVER_ENV_VAR: &str = "IMAGE_ANALYZER_SERVER";

/// Persisted application settings
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Settings {
    /// Base URL of the analysis service
    pub server_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

impl Settings {
    /// Resolve settings from the environment, the settings file, or defaults
    ///
    /// A malformed settings file is reported and ignored - startup never
    /// fails on configuration.
    pub fn load() -> Self {
        if let Ok(url) = std::env::var(SERVER_ENV_VAR) {
            if !url.trim().is_empty() {
                println!("🌐 Analysis service from ${}: {}", SERVER_ENV_VAR, url);
                return Self { server_url: url };
            }
        }

        let path = Self::settings_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(settings) => {
                    println!("⚙️  Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    eprintln!(
                        "⚠️  Ignoring malformed settings file {}: {}",
                        path.display(),
                        e
                    );
                    Self::default()
                }
            },
            // First run: write a template so the path is discoverable
            Err(_) => {
                let settings = Self::default();
                settings.save(&path);
                settings
            }
        }
    }

    /// Best-effort write of the settings file; failure is reported, not fatal
    fn save(&self, path: &PathBuf) {
        let json = match self.to_json() {
            Ok(json) => json,
            Err(_) => return,
        };

        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("⚠️  Could not create config directory: {}", e);
                return;
            }
        }

        if let Err(e) = std::fs::write(path, json) {
            eprintln!("⚠️  Could not write {}: {}", path.display(), e);
        }
    }

    /// Get the path where settings are stored
    ///
    /// - Linux: ~/.config/image-analyzer/settings.json
    /// - macOS: ~/Library/Application Support/image-analyzer/settings.json
    /// - Windows: %APPDATA%\image-analyzer\settings.json
    fn settings_path() -> PathBuf {
        let mut path = dirs::config_dir()
            .or_else(dirs::home_dir)
            .expect("Could not determine user config directory");

        path.push("image-analyzer");
        path.push("settings.json");
        path
    }

    /// Convert to JSON string for storage
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from JSON string (from the settings file)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_service() {
        let settings = Settings::default();
        assert_eq!(settings.server_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            server_url: "http://analysis.internal:8080".to_string(),
        };

        let json = settings.to_json().unwrap();
        let restored = Settings::from_json(&json).unwrap();

        assert_eq!(settings, restored);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{not json").is_err());
    }
}
