//! Pre-selecting a service from the page URL, e.g. `?service=Web%20Dev`.

use crate::Service;

/// Read the `service` query parameter and match it against the known labels.
///
/// Accepts the search string with or without its leading `?`. Only an exact
/// label match pre-selects anything; the first `service` parameter wins.
pub fn service_from_query(search: &str) -> Option<Service> {
    let query = search.strip_prefix('?').unwrap_or(search);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "service")
        .and_then(|(_, value)| Service::from_label(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_known_service() {
        assert_eq!(service_from_query("?service=Branding"), Some(Service::Branding));
        assert_eq!(service_from_query("service=Branding"), Some(Service::Branding));
    }

    #[test]
    fn test_decodes_query_values() {
        assert_eq!(service_from_query("?service=Web%20Dev"), Some(Service::WebDev));
        assert_eq!(service_from_query("?service=Mobile+App"), Some(Service::MobileApp));
        assert_eq!(service_from_query("?service=UI%2FUX"), Some(Service::UiUx));
        assert_eq!(service_from_query("?ref=ad&service=UI/UX"), Some(Service::UiUx));
    }

    #[test]
    fn test_ignores_unknown_or_missing_service() {
        assert_eq!(service_from_query(""), None);
        assert_eq!(service_from_query("?"), None);
        assert_eq!(service_from_query("?ref=newsletter"), None);
        assert_eq!(service_from_query("?service=SEO"), None);
        assert_eq!(service_from_query("?service=web%20dev"), None);
    }

    #[test]
    fn test_first_service_parameter_wins() {
        assert_eq!(
            service_from_query("?service=SEO&service=Branding"),
            None
        );
        assert_eq!(
            service_from_query("?service=Branding&service=SEO"),
            Some(Service::Branding)
        );
    }
}
