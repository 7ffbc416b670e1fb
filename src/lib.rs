//! # tyk-oas-builder
//!
//! Builds and merges the `x-tyk-api-gateway` extension for OpenAPI 3.x
//! documents: the gateway-native configuration object that drives request
//! routing, authentication and per-operation middleware.
//!
//! ## Overview
//!
//! Given an already parsed [`oas3::OpenApiV3Spec`], the crate either creates
//! a brand-new extension from the document's declared servers, paths and
//! security, or refreshes an existing, possibly hand-edited extension while
//! honoring caller-supplied overrides. The core is a three-way merge of
//! document defaults × existing extension × caller overrides, and its first
//! rule is to never silently discard configuration a user set by hand.
//!
//! ## Architecture
//!
//! - **[`extension`]** - the serde data model of the gateway extension
//! - **[`builder`]** - the defaulting/merge engine: override extraction, URL
//!   resolution, operation keys, middleware derivation, security import
//! - **[`OasDocument`]** - document wrapper owning the extension, with the
//!   single public entry point [`OasDocument::build_default_tyk_extension`]
//! - **[`load`]** - YAML/JSON parsing that splits the extension out of a raw
//!   document and re-embeds it on serialization
//!
//! The crate performs no I/O beyond [`load`], holds no locks, and installs no
//! `tracing` subscriber; distinct documents can be processed in parallel.
//!
//! ## Example
//!
//! ```
//! use tyk_oas_builder::{load, TykExtensionConfigParams};
//!
//! let yaml = r#"
//! openapi: 3.0.3
//! info:
//!   title: Petstore
//!   version: '1.0'
//! servers:
//!   - url: https://petstore.example.org/api
//! paths: {}
//! "#;
//!
//! let mut document = load::parse_yaml(yaml)?;
//! document.build_default_tyk_extension(TykExtensionConfigParams::default())?;
//!
//! let extension = document.get_tyk_extension().expect("extension was just built");
//! assert_eq!(extension.server.listen_path.value, "/");
//! assert_eq!(extension.upstream.url, "https://petstore.example.org/api");
//! assert_eq!(extension.info.name, "Petstore");
//! assert!(extension.info.state.active);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod builder;
pub mod error;
pub mod extension;
pub mod load;
mod oas;

pub use builder::params::{get_tyk_extension_config_params, TykExtensionConfigParams};
pub use error::BuildError;
pub use extension::{
    Allowance, AuthSource, AuthSourceLocation, AuthSources, Authentication, Info, ListenPath,
    Middleware, Operation, Operations, SecuritySchemes, Server, State, Token, Upstream,
    ValidateRequest, XTykApiGateway, EXTENSION_KEY,
};
pub use oas::OasDocument;
