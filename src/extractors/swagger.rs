use super::{body_like_parameters, RequestBodyExtractor};
use crate::document::ApiDocument;
use crate::spec::resolver::resolve_shared_refs;
use serde_json::Value;
use tracing::warn;

/// Swagger 2.x: request bodies are `body`/`formData` entries in
/// `operation.parameters`, with shared schemas under `definitions`.
pub struct Swagger2Extractor;

impl RequestBodyExtractor for Swagger2Extractor {
    fn extract_request_body(&self, doc: &ApiDocument, operation: &Value) -> Option<Value> {
        let body_parameters = body_like_parameters(operation);
        if body_parameters.is_empty() {
            return None;
        }

        let Some(definitions) = doc.parsed_spec.get("definitions") else {
            warn!("document has no `definitions`; returning unresolved body parameters");
            return Some(Value::Array(
                body_parameters.into_iter().cloned().collect(),
            ));
        };

        // At most one `body` parameter is valid per operation; first wins.
        let body = body_parameters
            .iter()
            .find(|param| param.get("in").and_then(Value::as_str) == Some("body"));
        if let Some(body) = body {
            let schema = body.get("schema").unwrap_or(&Value::Null);
            return Some(resolve_shared_refs(definitions, schema));
        }

        // Only formData parameters remain; each schema resolves on its own.
        let schemas = body_parameters
            .iter()
            .map(|param| resolve_shared_refs(definitions, param.get("schema").unwrap_or(&Value::Null)))
            .collect();
        Some(Value::Array(schemas))
    }
}
