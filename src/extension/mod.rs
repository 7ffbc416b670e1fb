//! Data model for the `x-tyk-api-gateway` document extension.
//!
//! These types mirror the gateway's native configuration object. They are
//! plain serde-derived data: all defaulting and merge logic lives in
//! [`crate::builder`] and the orchestrator on [`crate::OasDocument`].

mod auth;
mod gateway;
mod middleware;

pub use auth::{
    AuthSource, AuthSourceLocation, AuthSources, Authentication, SecuritySchemes, Token,
};
pub use gateway::{Info, ListenPath, Server, State, Upstream, XTykApiGateway, EXTENSION_KEY};
pub use middleware::{Allowance, Middleware, Operation, Operations, ValidateRequest};
