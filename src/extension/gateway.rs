use serde::{Deserialize, Serialize};

use super::auth::Authentication;
use super::middleware::Middleware;

/// Document key under which the gateway extension is stored.
pub const EXTENSION_KEY: &str = "x-tyk-api-gateway";

/// The gateway-native configuration object attached to an OAS document.
///
/// One document holds at most one of these. It is created once and then
/// mutated in place across repeated configuration-update calls; fields a user
/// set by hand are only replaced when an explicit override asks for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XTykApiGateway {
    /// Display metadata and activation state.
    #[serde(default)]
    pub info: Info,
    /// Listen-side configuration: listen path, custom domain, authentication.
    #[serde(default)]
    pub server: Server,
    /// Target the gateway proxies matched traffic to.
    #[serde(default)]
    pub upstream: Upstream,
    /// Per-operation middleware, keyed by operation id. `None` means no
    /// middleware has ever been configured, which is distinct from an empty
    /// map and must be preserved on round trips.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middleware: Option<Middleware>,
}

/// API display name and activation state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Info {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default)]
    pub state: State,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Whether the gateway should serve this API.
    #[serde(default)]
    pub active: bool,
}

/// Listen-side server block of the extension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    #[serde(default)]
    pub listen_path: ListenPath,
    /// Domain the listen path is bound to; empty means the gateway default.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub custom_domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication: Option<Authentication>,
}

/// Path prefix the gateway listens on for this API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListenPath {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
    /// Strip the listen path before proxying upstream.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub strip: bool,
}

/// Upstream target configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Upstream {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
}
