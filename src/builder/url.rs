use oas3::OpenApiV3Spec;
use url::Url;

use super::params::TykExtensionConfigParams;
use crate::error::BuildError;

/// Resolve the upstream URL for this run.
///
/// Precedence: a supplied override wins and must be an absolute URL; with no
/// override, the document's first server fills the upstream only while the
/// extension has none configured yet. `Ok(None)` means "leave the existing
/// value alone".
///
/// Runs before any extension mutation so a failure here leaves the document
/// exactly as it was.
pub(crate) fn resolve_upstream_url(
    spec: &OpenApiV3Spec,
    params: &TykExtensionConfigParams,
    existing_upstream: Option<&str>,
) -> Result<Option<String>, BuildError> {
    if !params.upstream_url.is_empty() {
        if !is_absolute_url(&params.upstream_url) {
            return Err(BuildError::InvalidUpstreamUrl);
        }
        return Ok(Some(params.upstream_url.clone()));
    }

    if existing_upstream.is_some() {
        return Ok(None);
    }

    let server_url = match spec.servers.first() {
        Some(server) => server.url.as_str(),
        None => return Err(BuildError::EmptyServersObject),
    };
    if !is_absolute_url(server_url) {
        return Err(BuildError::InvalidServerUrl);
    }
    Ok(Some(server_url.to_string()))
}

/// Candidate listen path, or `None` when the existing value passes through.
pub(crate) fn resolve_listen_path(
    params: &TykExtensionConfigParams,
    existing_listen_path: Option<&str>,
) -> Option<String> {
    if !params.listen_path.is_empty() {
        return Some(params.listen_path.clone());
    }
    if existing_listen_path.is_none() {
        return Some("/".to_string());
    }
    None
}

/// An upstream target must carry both a scheme and a host.
fn is_absolute_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}
