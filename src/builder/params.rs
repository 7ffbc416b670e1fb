use http::Request;
use url::form_urlencoded;

/// Caller-supplied overrides for a configuration-update run.
///
/// Empty strings mean "not supplied" for the three string overrides; the
/// booleans are tri-state, with `None` meaning "no intent to change". An
/// absent override never replaces previously configured extension state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TykExtensionConfigParams {
    pub listen_path: String,
    pub upstream_url: String,
    pub custom_domain: String,
    /// Import authentication from the document's security requirements.
    pub authentication: Option<bool>,
    /// Toggle the allow-list entry of every documented operation.
    pub allow_list: Option<bool>,
    /// Toggle request validation for operations with a JSON request body.
    pub validate_request: Option<bool>,
}

/// Extract extension overrides from the query string of a request.
///
/// Recognized keys: `listenPath`, `upstreamURL`, `customDomain`,
/// `validateRequest` and `allowList`. The boolean keys accept only the
/// literals `true` and `false`; anything else leaves that override absent.
/// Returns `None` when no key was recognized, so callers can tell "no intent
/// to override" apart from "override with defaults".
pub fn get_tyk_extension_config_params<T>(
    request: &Request<T>,
) -> Option<TykExtensionConfigParams> {
    let query = request.uri().query().unwrap_or("");

    let mut params = TykExtensionConfigParams::default();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let value = value.trim();
        match key.as_ref() {
            "listenPath" => params.listen_path = value.to_string(),
            "upstreamURL" => params.upstream_url = value.to_string(),
            "customDomain" => params.custom_domain = value.to_string(),
            "validateRequest" => params.validate_request = parse_bool_param(value),
            "allowList" => params.allow_list = parse_bool_param(value),
            _ => {}
        }
    }

    if params == TykExtensionConfigParams::default() {
        None
    } else {
        Some(params)
    }
}

fn parse_bool_param(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(query: &str) -> Request<()> {
        #[allow(clippy::unwrap_used)]
        Request::builder()
            .method(http::Method::PATCH)
            .uri(format!("/api/import{}", query))
            .body(())
            .unwrap()
    }

    #[test]
    fn bool_params_accept_only_literals() {
        assert_eq!(parse_bool_param("true"), Some(true));
        assert_eq!(parse_bool_param("false"), Some(false));
        assert_eq!(parse_bool_param("TRUE"), None);
        assert_eq!(parse_bool_param("1"), None);
        assert_eq!(parse_bool_param(""), None);
    }

    #[test]
    fn empty_values_count_as_absent() {
        assert_eq!(get_tyk_extension_config_params(&request("?listenPath=")), None);
    }

    #[test]
    fn percent_encoded_values_are_decoded() {
        let params =
            get_tyk_extension_config_params(&request("?upstreamURL=https%3A%2F%2Fupstream.org"))
                .unwrap();
        assert_eq!(params.upstream_url, "https://upstream.org");
    }
}
