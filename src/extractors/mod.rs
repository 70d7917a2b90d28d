pub mod openapi;
pub mod swagger;

pub use openapi::OpenApi3Extractor;
pub use swagger::Swagger2Extractor;

use crate::document::ApiDocument;
use serde_json::Value;

/// Dialect-specific extraction of an operation's request-body data into
/// the one shape the presentation layer renders.
///
/// Implementations hold no state; extraction is a pure function of the
/// document and operation, so repeated calls are cheap and safe to run
/// concurrently.
pub trait RequestBodyExtractor {
    /// The normalized request-body value for `operation`, or `None` when
    /// the operation carries no body data.
    fn extract_request_body(&self, doc: &ApiDocument, operation: &Value) -> Option<Value>;
}

/// Parameters describing payload data in either dialect: `in` is `body`
/// or `formData`.
fn body_like_parameters(operation: &Value) -> Vec<&Value> {
    operation
        .get("parameters")
        .and_then(Value::as_array)
        .map(|params| {
            params
                .iter()
                .filter(|param| {
                    matches!(
                        param.get("in").and_then(Value::as_str),
                        Some("body") | Some("formData")
                    )
                })
                .collect()
        })
        .unwrap_or_default()
}
