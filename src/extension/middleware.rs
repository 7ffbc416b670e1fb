use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-operation middleware settings, keyed by operation id.
///
/// `BTreeMap` keeps iteration and serialization order deterministic; the
/// merge logic never depends on it, but diffs and round trips should.
pub type Operations = BTreeMap<String, Operation>;

/// Middleware block of the extension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Middleware {
    #[serde(default, skip_serializing_if = "Operations::is_empty")]
    pub operations: Operations,
}

/// Middleware configuration for a single (path, method) operation.
///
/// Absent fields mean "not configured" and survive merges untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow: Option<Allowance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<Allowance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validate_request: Option<ValidateRequest>,
}

impl Operation {
    /// True when no middleware is configured for this operation.
    pub fn is_empty(&self) -> bool {
        self.allow.is_none() && self.block.is_none() && self.validate_request.is_none()
    }
}

/// Allow- or block-list entry for an operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Allowance {
    #[serde(default)]
    pub enabled: bool,
}

/// Request-validation toggle for an operation with a JSON request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRequest {
    #[serde(default)]
    pub enabled: bool,
    /// Status returned when the request body fails schema validation.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub error_response_code: u16,
}

fn is_zero(code: &u16) -> bool {
    *code == 0
}
