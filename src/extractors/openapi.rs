use super::{body_like_parameters, RequestBodyExtractor};
use crate::document::ApiDocument;
use serde_json::Value;

/// OpenAPI 3.x: request bodies live on `operation.requestBody`, already
/// fully resolved by the loader.
pub struct OpenApi3Extractor;

impl RequestBodyExtractor for OpenApi3Extractor {
    fn extract_request_body(&self, _doc: &ApiDocument, operation: &Value) -> Option<Value> {
        if let Some(request_body) = operation.get("requestBody") {
            return Some(request_body.clone());
        }

        // Mixed or malformed documents sometimes keep Swagger-style body
        // parameters; surface them rather than dropping the data.
        let fallback = body_like_parameters(operation);
        if fallback.is_empty() {
            None
        } else {
            Some(Value::Array(fallback.into_iter().cloned().collect()))
        }
    }
}
