use oas3::OpenApiV3Spec;
use tracing::debug;

use crate::builder;
use crate::builder::params::TykExtensionConfigParams;
use crate::error::BuildError;
use crate::extension::{Authentication, XTykApiGateway};

/// A parsed OAS document together with its optional gateway extension.
///
/// The document owns the extension for its whole lifetime: the extension is
/// created at most once and then mutated in place across repeated
/// configuration-update calls. The document model itself is never modified
/// here; only the attached extension changes.
#[derive(Debug, Clone)]
pub struct OasDocument {
    spec: OpenApiV3Spec,
    extension: Option<XTykApiGateway>,
}

impl OasDocument {
    /// Wrap an already parsed document with no extension attached.
    pub fn new(spec: OpenApiV3Spec) -> Self {
        Self {
            spec,
            extension: None,
        }
    }

    /// Wrap an already parsed document and a previously stored extension.
    pub fn from_parts(spec: OpenApiV3Spec, extension: Option<XTykApiGateway>) -> Self {
        Self { spec, extension }
    }

    pub fn spec(&self) -> &OpenApiV3Spec {
        &self.spec
    }

    /// The attached extension, if any.
    pub fn get_tyk_extension(&self) -> Option<&XTykApiGateway> {
        self.extension.as_ref()
    }

    pub fn get_tyk_extension_mut(&mut self) -> Option<&mut XTykApiGateway> {
        self.extension.as_mut()
    }

    /// Attach `extension`, replacing any previous one.
    pub fn set_tyk_extension(&mut self, extension: XTykApiGateway) {
        self.extension = Some(extension);
    }

    /// Detach and return the extension.
    pub fn remove_tyk_extension(&mut self) -> Option<XTykApiGateway> {
        self.extension.take()
    }

    /// The extension's authentication block, if configured.
    pub fn get_tyk_authentication(&self) -> Option<&Authentication> {
        self.extension
            .as_ref()
            .and_then(|extension| extension.server.authentication.as_ref())
    }

    /// Create or refresh the gateway extension from document defaults and
    /// caller overrides.
    ///
    /// Precedence per field: explicit override, then previously configured
    /// extension state, then the document default. Fields the caller did not
    /// override and that were already set are left untouched, so repeated
    /// calls with the same document and overrides are idempotent.
    ///
    /// Listen path and upstream URL are resolved before anything is written;
    /// a resolution failure leaves the document without any partial state,
    /// including the extension itself when none was attached yet.
    ///
    /// # Errors
    ///
    /// [`BuildError::InvalidUpstreamUrl`] for a malformed `upstreamURL`
    /// override, [`BuildError::EmptyServersObject`] /
    /// [`BuildError::InvalidServerUrl`] when the upstream has to fall back to
    /// a missing or malformed `servers` entry, and
    /// [`BuildError::EmptySecurityObject`] when authentication import was
    /// requested on a document without security requirements.
    pub fn build_default_tyk_extension(
        &mut self,
        params: TykExtensionConfigParams,
    ) -> Result<(), BuildError> {
        let existing_upstream = self
            .extension
            .as_ref()
            .map(|extension| extension.upstream.url.as_str())
            .filter(|url| !url.is_empty());
        let upstream_url = builder::url::resolve_upstream_url(&self.spec, &params, existing_upstream)?;

        let existing_listen_path = self
            .extension
            .as_ref()
            .map(|extension| extension.server.listen_path.value.as_str())
            .filter(|value| !value.is_empty());
        let listen_path = builder::url::resolve_listen_path(&params, existing_listen_path);

        if self.extension.is_none() {
            debug!(api = %self.spec.info.title, "no gateway extension attached, creating one");
        }
        let extension = self.extension.get_or_insert_with(XTykApiGateway::default);

        if let Some(value) = listen_path {
            extension.server.listen_path.value = value;
        }
        if !params.custom_domain.is_empty() {
            extension.server.custom_domain = params.custom_domain.clone();
        }
        if let Some(url) = upstream_url {
            extension.upstream.url = url;
        }

        if extension.info.name.is_empty() {
            extension.info.name = self.spec.info.title.clone();
        }
        extension.info.state.active = true;

        if let Some(enable) = params.authentication {
            builder::security::import_authentication(&self.spec, extension, enable)?;
        }
        builder::middleware::import_middlewares(&self.spec, extension, &params);

        Ok(())
    }

    /// Import authentication on its own, outside a full default build.
    ///
    /// Exposed as a seam for callers that manage server and upstream fields
    /// themselves; [`Self::build_default_tyk_extension`] calls the same
    /// logic when the authentication override is present.
    pub fn import_authentication(&mut self, enable: bool) -> Result<(), BuildError> {
        if self.spec.security.is_empty() {
            return Err(BuildError::EmptySecurityObject);
        }
        let extension = self.extension.get_or_insert_with(XTykApiGateway::default);
        builder::security::import_authentication(&self.spec, extension, enable)
    }
}
