//! Settings - Application Settings

use serde::{Deserialize, Serialize};

/// Base URL used when neither the environment nor the settings file
/// provides one.
pub const DEFAULT_LEADS_API_URL: &str = "https://api.kairosteams.com";

/// Environment variable overriding the lead endpoint base URL
pub const LEADS_API_URL_ENV: &str = "LEADS_API_URL";

/// Persisted application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Base URL of the lead-capture API
    #[serde(default = "default_leads_api_url")]
    pub leads_api_url: String,
}

fn default_leads_api_url() -> String {
    DEFAULT_LEADS_API_URL.to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            leads_api_url: default_leads_api_url(),
        }
    }
}

impl AppSettings {
    /// Effective settings: environment override first, then the
    /// settings file in the app data dir, then defaults.
    pub fn resolve() -> Self {
        if let Ok(url) = std::env::var(LEADS_API_URL_ENV) {
            let url = url.trim().to_string();
            if !url.is_empty() {
                return Self { leads_api_url: url };
            }
        }
        crate::utils::config_store::load_config::<AppSettings>("settings.json").unwrap_or_default()
    }

    /// Full URL the lead payload is posted to
    pub fn lead_endpoint(&self) -> String {
        format!("{}/lead", self.leads_api_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_endpoint_joins_without_doubled_slashes() {
        let settings = AppSettings {
            leads_api_url: "https://api.example.com/".to_string(),
        };
        assert_eq!(settings.lead_endpoint(), "https://api.example.com/lead");
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let settings: AppSettings = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(settings.leads_api_url, DEFAULT_LEADS_API_URL);
    }
}
