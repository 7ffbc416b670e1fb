//! Parsing front door: turn YAML or JSON text into an [`OasDocument`],
//! splitting a previously stored `x-tyk-api-gateway` object out of the raw
//! document, and re-embed it on the way back out.
//!
//! The core engine only ever sees an already parsed document; everything in
//! this module is convenience plumbing around `serde_yaml` / `serde_json`.

use anyhow::Context;
use oas3::OpenApiV3Spec;
use std::path::Path;

use crate::extension::{XTykApiGateway, EXTENSION_KEY};
use crate::oas::OasDocument;

/// Parse a document from YAML text.
pub fn parse_yaml(content: &str) -> anyhow::Result<OasDocument> {
    let value: serde_json::Value =
        serde_yaml::from_str(content).context("invalid YAML document")?;
    document_from_value(value)
}

/// Parse a document from JSON text.
pub fn parse_json(content: &str) -> anyhow::Result<OasDocument> {
    let value: serde_json::Value =
        serde_json::from_str(content).context("invalid JSON document")?;
    document_from_value(value)
}

/// Load a document from disk, choosing the parser by file extension
/// (`.yaml`/`.yml` parse as YAML, everything else as JSON).
pub fn load_file(path: impl AsRef<Path>) -> anyhow::Result<OasDocument> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;

    let is_yaml = path
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("yaml") || extension.eq_ignore_ascii_case("yml"));

    if is_yaml {
        parse_yaml(&content)
    } else {
        parse_json(&content)
    }
}

/// Serialize the document back to a JSON value with the extension, when one
/// is attached, re-embedded under its `x-tyk-api-gateway` key.
pub fn to_json_value(document: &OasDocument) -> anyhow::Result<serde_json::Value> {
    let mut value = serde_json::to_value(document.spec())?;
    if let Some(extension) = document.get_tyk_extension() {
        value
            .as_object_mut()
            .context("document did not serialize to an object")?
            .insert(EXTENSION_KEY.to_string(), serde_json::to_value(extension)?);
    }
    Ok(value)
}

fn document_from_value(mut value: serde_json::Value) -> anyhow::Result<OasDocument> {
    let extension: Option<XTykApiGateway> = value
        .as_object_mut()
        .and_then(|object| object.remove(EXTENSION_KEY))
        .map(serde_json::from_value)
        .transpose()
        .context("invalid x-tyk-api-gateway extension")?;

    let spec: OpenApiV3Spec =
        serde_json::from_value(value).context("invalid OpenAPI document")?;

    Ok(OasDocument::from_parts(spec, extension))
}
