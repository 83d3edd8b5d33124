use log::warn;

pub const BACKEND_URL_KEY: &str = "BACKEND_URL";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Origin of the analysis backend, without a trailing slash.
    pub backend_url: String,
    pub request_timeout_ms: u32,
    pub asset_retry_delay_ms: u32,
    pub asset_retry_limit: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout_ms: 60_000,
            asset_retry_delay_ms: 300,
            asset_retry_limit: 3,
        }
    }
}

impl ClientConfig {
    /// Builds the config from a key lookup; only the backend origin is configurable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup(BACKEND_URL_KEY) {
            let url = url.trim().trim_end_matches('/');
            if url.is_empty() {
                warn!("{} is empty, using {}", BACKEND_URL_KEY, DEFAULT_BACKEND_URL);
            } else {
                config.backend_url = url.to_string();
            }
        }
        config
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.backend_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DETECT_OPTIC_DISC_PATH, DIAGNOSIS_GLAUCOMA_PATH};

    #[test]
    fn defaults_without_overrides() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config, ClientConfig::default());
        assert_eq!(
            config.endpoint(DETECT_OPTIC_DISC_PATH),
            "http://localhost:8000/api/detect-optic-disc"
        );
        assert_eq!(
            config.endpoint(DIAGNOSIS_GLAUCOMA_PATH),
            "http://localhost:8000/api/diagnosis-glaucoma"
        );
    }

    #[test]
    fn backend_url_is_normalised() {
        let config = ClientConfig::from_lookup(|key| {
            (key == BACKEND_URL_KEY).then(|| " https://analysis.example.org/ ".to_string())
        });
        assert_eq!(config.backend_url, "https://analysis.example.org");
        assert_eq!(config.request_timeout_ms, 60_000);
    }

    #[test]
    fn empty_backend_url_falls_back_to_default() {
        let config = ClientConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    }
}
