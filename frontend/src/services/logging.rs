use super::config::AppConfig;

/// Console logger tagging each line with the component that wrote it
pub struct Logger;

impl Logger {
    /// Only emitted when `ONBOARDING_DEBUG_LOG` was set at build time
    pub fn debug_with_component(component: &str, message: &str) {
        if AppConfig::from_env().debug_logging {
            gloo::console::debug!(Self::line(component, message));
        }
    }

    pub fn info_with_component(component: &str, message: &str) {
        gloo::console::info!(Self::line(component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        gloo::console::warn!(Self::line(component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        gloo::console::error!(Self::line(component, message));
    }

    fn line(component: &str, message: &str) -> String {
        format!("[{}] {}", component, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_format() {
        assert_eq!(
            Logger::line("OnboardingForm", "submitted"),
            "[OnboardingForm] submitted"
        );
    }
}
