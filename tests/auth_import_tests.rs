use std::collections::BTreeMap;

use oas3::spec::SecurityScheme;
use tyk_oas_builder::{
    AuthSource, AuthSourceLocation, AuthSources, Authentication, BuildError, OasDocument,
    SecuritySchemes, Server, Token, XTykApiGateway,
};

const SCHEME_NAME: &str = "my_auth_token";
const HEADER_NAME: &str = "my-auth-token-header";
const COOKIE_NAME: &str = "my-auth-token-cookie";

const DOC_NO_SECURITY: &str = r#"
openapi: 3.0.3
info:
  title: OAS API
  version: '1.0'
paths: {}
"#;

const DOC_COOKIE_TOKEN: &str = r#"
openapi: 3.0.3
info:
  title: OAS API
  version: '1.0'
security:
  - my_auth_token: []
components:
  securitySchemes:
    my_auth_token:
      type: apiKey
      in: cookie
      name: my-auth-token-cookie
paths: {}
"#;

fn document(yaml: &str) -> OasDocument {
    OasDocument::new(serde_yaml::from_str(yaml).unwrap())
}

fn native_scheme(yaml: &str) -> SecurityScheme {
    serde_yaml::from_str(yaml).unwrap()
}

#[test]
fn import_fails_on_empty_security() {
    let mut document = document(DOC_NO_SECURITY);
    document.set_tyk_extension(XTykApiGateway::default());

    let err = document.import_authentication(true).unwrap_err();
    assert_eq!(err, BuildError::EmptySecurityObject);
    assert!(document.get_tyk_authentication().is_none());
}

#[test]
fn import_without_extension_attaches_none_on_failure() {
    let mut document = document(DOC_NO_SECURITY);

    let err = document.import_authentication(true).unwrap_err();
    assert_eq!(err, BuildError::EmptySecurityObject);
    assert!(document.get_tyk_extension().is_none());
}

#[test]
fn add_authentication() {
    for enable in [true, false] {
        let mut document = document(DOC_COOKIE_TOKEN);
        document.set_tyk_extension(XTykApiGateway::default());

        document.import_authentication(enable).unwrap();

        let authentication = document.get_tyk_authentication().unwrap();
        assert_eq!(authentication.enabled, enable);

        let expected = SecuritySchemes(BTreeMap::from([(
            SCHEME_NAME.to_string(),
            Token {
                enabled: enable,
                auth_sources: AuthSources {
                    cookie: Some(AuthSource {
                        enabled: true,
                        name: String::new(),
                    }),
                    ..Default::default()
                },
            },
        )]));

        assert_eq!(authentication.security_schemes, expected);
    }
}

#[test]
fn update_existing_scheme_is_additive() {
    let mut document = document(DOC_COOKIE_TOKEN);
    document.set_tyk_extension(XTykApiGateway {
        server: Server {
            authentication: Some(Authentication {
                enabled: false,
                security_schemes: SecuritySchemes(BTreeMap::from([(
                    SCHEME_NAME.to_string(),
                    Token {
                        enabled: false,
                        auth_sources: AuthSources {
                            header: Some(AuthSource {
                                enabled: true,
                                name: HEADER_NAME.to_string(),
                            }),
                            ..Default::default()
                        },
                    },
                )])),
            }),
            ..Default::default()
        },
        ..Default::default()
    });

    document.import_authentication(true).unwrap();

    let authentication = document.get_tyk_authentication().unwrap();
    assert!(authentication.enabled);

    let expected = SecuritySchemes(BTreeMap::from([(
        SCHEME_NAME.to_string(),
        Token {
            enabled: true,
            auth_sources: AuthSources {
                header: Some(AuthSource {
                    enabled: true,
                    name: HEADER_NAME.to_string(),
                }),
                cookie: Some(AuthSource {
                    enabled: true,
                    name: String::new(),
                }),
                ..Default::default()
            },
        },
    )]));

    assert_eq!(authentication.security_schemes, expected);
}

#[test]
fn security_schemes_import_token() {
    for enable in [true, false] {
        let mut security_schemes = SecuritySchemes::default();
        let native = native_scheme(&format!(
            "type: apiKey\nin: header\nname: {HEADER_NAME}\n"
        ));

        security_schemes.import(SCHEME_NAME, &native, enable);

        let expected = Token {
            enabled: enable,
            auth_sources: AuthSources {
                header: Some(AuthSource {
                    enabled: true,
                    name: String::new(),
                }),
                ..Default::default()
            },
        };

        assert_eq!(security_schemes.get(SCHEME_NAME), Some(&expected));
    }
}

#[test]
fn security_schemes_import_bearer_jwt_as_header_token() {
    let mut security_schemes = SecuritySchemes::default();
    let native = native_scheme("type: http\nscheme: bearer\nbearerFormat: JWT\n");

    security_schemes.import(SCHEME_NAME, &native, true);

    let token = security_schemes.get(SCHEME_NAME).unwrap();
    assert!(token.enabled);
    assert!(token.auth_sources.header.as_ref().unwrap().enabled);
}

#[test]
fn security_schemes_skip_unsupported_types() {
    let mut security_schemes = SecuritySchemes::default();
    let native = native_scheme("type: http\nscheme: basic\n");

    security_schemes.import(SCHEME_NAME, &native, true);

    assert!(security_schemes.is_empty());
}

#[test]
fn security_schemes_update_existing_token() {
    let mut security_schemes = SecuritySchemes(BTreeMap::from([(
        SCHEME_NAME.to_string(),
        Token {
            enabled: false,
            auth_sources: AuthSources {
                cookie: Some(AuthSource {
                    enabled: true,
                    name: COOKIE_NAME.to_string(),
                }),
                ..Default::default()
            },
        },
    )]));
    let native = native_scheme(&format!(
        "type: apiKey\nin: header\nname: {HEADER_NAME}\n"
    ));

    security_schemes.import(SCHEME_NAME, &native, true);

    let expected = Token {
        enabled: true,
        auth_sources: AuthSources {
            header: Some(AuthSource {
                enabled: true,
                name: String::new(),
            }),
            cookie: Some(AuthSource {
                enabled: true,
                name: COOKIE_NAME.to_string(),
            }),
            ..Default::default()
        },
    };

    assert_eq!(security_schemes.get(SCHEME_NAME), Some(&expected));
}

#[test]
fn auth_sources_import_each_location() {
    let expected = AuthSource {
        enabled: true,
        name: String::new(),
    };

    let mut sources = AuthSources::default();
    sources.import(AuthSourceLocation::Header);
    assert_eq!(sources.header, Some(expected.clone()));

    let mut sources = AuthSources::default();
    sources.import(AuthSourceLocation::Query);
    assert_eq!(sources.query, Some(expected.clone()));

    let mut sources = AuthSources::default();
    sources.import(AuthSourceLocation::Cookie);
    assert_eq!(sources.cookie, Some(expected));
}

#[test]
fn auth_sources_import_preserves_configured_name() {
    let mut sources = AuthSources {
        header: Some(AuthSource {
            enabled: false,
            name: HEADER_NAME.to_string(),
        }),
        ..Default::default()
    };

    sources.import(AuthSourceLocation::Header);

    assert_eq!(
        sources.header,
        Some(AuthSource {
            enabled: true,
            name: HEADER_NAME.to_string(),
        })
    );
}
