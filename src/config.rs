// SPDX-License-Identifier: GPL-3.0-only

use std::path::{Path, PathBuf};

use anywho::{Error, anywho};
use serde::{Deserialize, Serialize};

pub const APP_ID: &str = "dev.mariinkys.StarryView";

/// Environment variable that replaces the configured PokéAPI base URL
pub const API_URL_ENV: &str = "STARRYVIEW_API_URL";

const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";
const DEFAULT_PAGE_SIZE: u32 = 24;
const DEFAULT_TOTAL_KNOWN: u32 = 1025;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarryConfig {
    pub api_base_url: String,
    pub page_size: u32,
    /// Highest Pokédex number the gallery pages through, bump it when new generations land
    pub total_known: u32,
    pub flavor_language: String,
    /// Detail shown on startup
    pub initial_query: String,
    pub transition_millis: u64,
    pub request_timeout_secs: Option<u64>,
    pub log_filter: Option<String>,
}

impl Default for StarryConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::from(DEFAULT_API_BASE_URL),
            page_size: DEFAULT_PAGE_SIZE,
            total_known: DEFAULT_TOTAL_KNOWN,
            flavor_language: String::from("en"),
            initial_query: String::from("1"),
            transition_millis: 300,
            request_timeout_secs: None,
            log_filter: None,
        }
    }
}

impl StarryConfig {
    /// Default location of the config file
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_ID).join("config.ron"))
    }

    /// Loads the user config, falling back to defaults when it's missing or broken
    pub fn load() -> Self {
        let config = match Self::config_path() {
            Some(path) if path.exists() => Self::read(&path).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
                Self::default()
            }),
            _ => Self::default(),
        };

        config.with_env_overrides().validate()
    }

    /// Reads a RON config file
    pub fn read(path: &Path) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path)?;
        ron::from_str(&contents).map_err(|e| anywho!("{e}"))
    }

    fn with_env_overrides(self) -> Self {
        self.with_api_url(std::env::var(API_URL_ENV).ok())
    }

    /// Replaces the base URL unless `url` is missing or blank
    fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url
            && !url.trim().is_empty()
        {
            self.api_base_url = url;
        }
        self
    }

    /// Replaces values the viewer cannot work with by their defaults
    pub fn validate(mut self) -> Self {
        if self.page_size == 0 {
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        if self.total_known == 0 {
            self.total_known = DEFAULT_TOTAL_KNOWN;
        }

        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        self.api_base_url = if trimmed.is_empty() {
            String::from(DEFAULT_API_BASE_URL)
        } else {
            trimmed.to_string()
        };

        if self.flavor_language.trim().is_empty() {
            self.flavor_language = String::from("en");
        }

        self
    }
}
