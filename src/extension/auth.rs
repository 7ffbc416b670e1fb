use oas3::spec::SecurityScheme;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Authentication block of the extension's server section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Authentication {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "SecuritySchemes::is_empty")]
    pub security_schemes: SecuritySchemes,
}

/// Imported security schemes, keyed by the scheme name declared in the
/// document's `components.securitySchemes` registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecuritySchemes(pub BTreeMap<String, Token>);

impl SecuritySchemes {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Token> {
        self.0.get(name)
    }

    /// Import one native OAS security scheme under `name`.
    ///
    /// API-key schemes map their `in:` location to the matching auth source;
    /// HTTP bearer schemes with a JWT format are treated as header-carried
    /// tokens. Anything else is skippable data, not an error. The merge is
    /// additive: an existing token keeps every source this run did not
    /// rediscover.
    pub fn import(&mut self, name: &str, native: &SecurityScheme, enable: bool) {
        let location = match native {
            SecurityScheme::ApiKey { location, .. } => match location.parse() {
                Ok(location) => location,
                Err(_) => {
                    debug!(scheme = name, location = %location, "skipping api key scheme with unknown location");
                    return;
                }
            },
            SecurityScheme::Http {
                scheme,
                bearer_format,
                ..
            } if scheme.eq_ignore_ascii_case("bearer")
                && bearer_format
                    .as_deref()
                    .is_some_and(|f| f.eq_ignore_ascii_case("jwt")) =>
            {
                AuthSourceLocation::Header
            }
            _ => {
                debug!(scheme = name, "skipping unsupported security scheme type");
                return;
            }
        };

        let token = self.0.entry(name.to_string()).or_default();
        token.enabled = enable;
        token.auth_sources.import(location);
    }
}

/// An API-key-style credential: enablement plus the sources it may be read
/// from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Token {
    #[serde(default)]
    pub enabled: bool,
    #[serde(flatten)]
    pub auth_sources: AuthSources,
}

/// The up-to-three locations a credential can be carried in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthSources {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<AuthSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<AuthSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie: Option<AuthSource>,
}

impl AuthSources {
    /// Enable the source for `location`, creating it when absent.
    ///
    /// A source that already exists keeps its configured credential name;
    /// the other two sources are never touched.
    pub fn import(&mut self, location: AuthSourceLocation) {
        let slot = match location {
            AuthSourceLocation::Header => &mut self.header,
            AuthSourceLocation::Query => &mut self.query,
            AuthSourceLocation::Cookie => &mut self.cookie,
        };

        match slot {
            Some(source) => source.enabled = true,
            None => {
                *slot = Some(AuthSource {
                    enabled: true,
                    ..AuthSource::default()
                })
            }
        }
    }
}

/// One credential location: whether it is consulted and, optionally, the
/// header/parameter/cookie name the credential travels under.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthSource {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

/// Closed enumeration of credential-carrying locations, shared by the
/// security importer and the auth-source merge so the `in:` strings from the
/// document are parsed in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSourceLocation {
    Header,
    Query,
    Cookie,
}

impl FromStr for AuthSourceLocation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "header" => Ok(AuthSourceLocation::Header),
            "query" => Ok(AuthSourceLocation::Query),
            "cookie" => Ok(AuthSourceLocation::Cookie),
            _ => Err(()),
        }
    }
}

impl fmt::Display for AuthSourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AuthSourceLocation::Header => "header",
            AuthSourceLocation::Query => "query",
            AuthSourceLocation::Cookie => "cookie",
        };
        write!(f, "{}", s)
    }
}
