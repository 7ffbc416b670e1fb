use oas3::spec::ObjectOrReference;
use oas3::OpenApiV3Spec;
use tracing::debug;

use crate::error::BuildError;
use crate::extension::{Authentication, XTykApiGateway};

/// Import the document's security requirements into the extension's
/// authentication model.
///
/// Every name in every top-level security requirement is resolved against
/// `components.securitySchemes`; names without a resolvable scheme are
/// tolerated and skipped, as partially specified documents are common. The
/// per-scheme merge is additive and never drops sources configured by hand.
///
/// `Authentication.enabled` reflects `enable` even when no scheme could be
/// imported.
pub(crate) fn import_authentication(
    spec: &OpenApiV3Spec,
    extension: &mut XTykApiGateway,
    enable: bool,
) -> Result<(), BuildError> {
    if spec.security.is_empty() {
        return Err(BuildError::EmptySecurityObject);
    }

    let authentication = extension
        .server
        .authentication
        .get_or_insert_with(Authentication::default);
    authentication.enabled = enable;

    let registry = spec.components.as_ref().map(|c| &c.security_schemes);
    for requirement in &spec.security {
        for scheme_name in requirement.0.keys() {
            let native = registry
                .and_then(|schemes| schemes.get(scheme_name))
                .and_then(|scheme| match scheme {
                    ObjectOrReference::Object(scheme) => Some(scheme),
                    ObjectOrReference::Ref { .. } => None,
                });

            match native {
                Some(scheme) => {
                    authentication
                        .security_schemes
                        .import(scheme_name, scheme, enable)
                }
                None => {
                    debug!(scheme = %scheme_name, "security scheme not resolvable, skipping");
                }
            }
        }
    }

    Ok(())
}
