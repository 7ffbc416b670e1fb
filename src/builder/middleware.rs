use http::StatusCode;
use oas3::spec::ObjectOrReference;
use oas3::OpenApiV3Spec;
use tracing::debug;

use super::operation::operation_key;
use super::params::TykExtensionConfigParams;
use crate::extension::{Allowance, Middleware, ValidateRequest, XTykApiGateway};

/// Apply the per-operation middleware overrides of this run.
///
/// Each pass only runs when its override is present; entries of operations
/// untouched by the current pass keep their pre-existing configuration. The
/// `Middleware` block itself is created lazily, so a run in which no
/// operation qualifies leaves it absent rather than empty.
pub(crate) fn import_middlewares(
    spec: &OpenApiV3Spec,
    extension: &mut XTykApiGateway,
    params: &TykExtensionConfigParams,
) {
    if let Some(enable) = params.allow_list {
        update_allow_list(spec, extension, enable);
    }
    if let Some(enable) = params.validate_request {
        update_validate_request(spec, extension, enable);
    }
}

/// Set the allow-list toggle on every documented operation.
///
/// Allow and block are mutually exclusive when allow is switched on: an
/// active block entry is forced off. Disabling allow leaves block entries
/// alone; the asymmetry is long-standing gateway behavior.
fn update_allow_list(spec: &OpenApiV3Spec, extension: &mut XTykApiGateway, enable: bool) {
    let keys = operation_keys(spec, |_| true);
    if keys.is_empty() {
        return;
    }

    debug!(operations = keys.len(), enable, "applying allow-list override");
    let middleware = extension.middleware.get_or_insert_with(Middleware::default);
    for key in keys {
        let operation = middleware.operations.entry(key).or_default();
        operation.allow = Some(Allowance { enabled: enable });
        if enable {
            if let Some(block) = operation.block.as_mut() {
                block.enabled = false;
            }
        }
    }
}

/// Set the validate-request toggle on every operation that declares an
/// `application/json` request body. Operations without one get no entry.
fn update_validate_request(spec: &OpenApiV3Spec, extension: &mut XTykApiGateway, enable: bool) {
    let keys = operation_keys(spec, has_json_request_body);
    if keys.is_empty() {
        return;
    }

    debug!(operations = keys.len(), enable, "applying validate-request override");
    let middleware = extension.middleware.get_or_insert_with(Middleware::default);
    for key in keys {
        let operation = middleware.operations.entry(key).or_default();
        operation.validate_request = Some(ValidateRequest {
            enabled: enable,
            error_response_code: StatusCode::BAD_REQUEST.as_u16(),
        });
    }
}

/// Keys of all documented operations matching `filter`, derived the same way
/// on every run so repeated imports land on the same entries.
fn operation_keys<F>(spec: &OpenApiV3Spec, filter: F) -> Vec<String>
where
    F: Fn(&oas3::spec::Operation) -> bool,
{
    let mut keys = Vec::new();
    if let Some(paths) = spec.paths.as_ref() {
        for (path, item) in paths {
            for (method, operation) in item.methods() {
                if filter(operation) {
                    keys.push(operation_key(
                        path,
                        method.as_str(),
                        operation.operation_id.as_deref(),
                    ));
                }
            }
        }
    }
    keys
}

fn has_json_request_body(operation: &oas3::spec::Operation) -> bool {
    match operation.request_body.as_ref() {
        Some(ObjectOrReference::Object(request_body)) => {
            request_body.content.contains_key("application/json")
        }
        _ => false,
    }
}
