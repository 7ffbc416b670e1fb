//! The defaulting/merge engine behind
//! [`OasDocument::build_default_tyk_extension`](crate::OasDocument::build_default_tyk_extension).
//!
//! Each submodule owns one concern of the three-way merge (document defaults
//! × existing extension × caller overrides):
//!
//! - [`params`] - caller overrides extracted from a request-like source
//! - [`url`] - listen path and upstream URL resolution
//! - [`operation`] - stable per-operation keys
//! - [`middleware`] - allow-list and validate-request derivation
//! - [`security`] - security-scheme import into the authentication model
//!
//! The merge precedence contract is: an explicit override always wins; absent
//! overrides leave previously configured extension state untouched; document
//! defaults fill only fields that were never set.

pub mod params;

pub(crate) mod middleware;
pub(crate) mod operation;
pub(crate) mod security;
pub(crate) mod url;
