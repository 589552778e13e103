/// Build-time configuration for the onboarding page.
///
/// Values are baked in when the wasm bundle is compiled:
/// `ONBOARD_URL=https://... trunk build`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Where accepted records are POSTed. Empty means submissions fail.
    pub endpoint_url: String,
    pub debug_logging: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("ONBOARD_URL"), option_env!("ONBOARDING_DEBUG_LOG"))
    }

    fn from_values(endpoint_url: Option<&str>, debug_logging: Option<&str>) -> Self {
        Self {
            endpoint_url: endpoint_url.unwrap_or_default().trim().to_string(),
            debug_logging: matches!(
                debug_logging.map(|value| value.trim().to_ascii_lowercase()).as_deref(),
                Some("1") | Some("true")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_endpoint_defaults_to_empty() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.endpoint_url, "");
        assert!(!config.debug_logging);
    }

    #[test]
    fn test_values_are_read() {
        let config = AppConfig::from_values(Some(" https://hooks.example.com/onboard "), Some("TRUE"));
        assert_eq!(config.endpoint_url, "https://hooks.example.com/onboard");
        assert!(config.debug_logging);

        assert!(AppConfig::from_values(None, Some("1")).debug_logging);
        assert!(!AppConfig::from_values(None, Some("yes")).debug_logging);
    }
}
