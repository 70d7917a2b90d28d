use crate::error::SpecError;
use crate::extractors::{OpenApi3Extractor, RequestBodyExtractor, Swagger2Extractor};
use serde::Serialize;
use serde_json::Value;

/// Specification family of a parsed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecDialect {
    /// OpenAPI 3.x (`openapi: "3.0.0"`)
    OpenApi,
    /// Swagger 2.x (`swagger: "2.0"`)
    Swagger,
}

impl SpecDialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenApi => "openapi",
            Self::Swagger => "swagger",
        }
    }

    /// The request-body extractor for this dialect, selected once at load
    /// time and carried on the document.
    pub fn request_body_extractor(&self) -> &'static (dyn RequestBodyExtractor + Send + Sync) {
        match self {
            Self::OpenApi => &OpenApi3Extractor,
            Self::Swagger => &Swagger2Extractor,
        }
    }
}

/// Classifies a parsed document by its version-declaring field.
///
/// # Errors
/// `UnsupportedDialect` unless the document declares `openapi: "3.x"` or
/// `swagger: "2.x"`; `MissingInfo` when a recognized document has no
/// `info` object, since title/version extraction is mandatory downstream.
pub fn detect_dialect(doc: &Value) -> Result<SpecDialect, SpecError> {
    let openapi = doc.get("openapi").and_then(Value::as_str);
    let swagger = doc.get("swagger").and_then(Value::as_str);

    let dialect = if openapi.is_some_and(|v| v.starts_with("3.")) {
        SpecDialect::OpenApi
    } else if swagger.is_some_and(|v| v.starts_with("2.")) {
        SpecDialect::Swagger
    } else {
        return Err(SpecError::UnsupportedDialect);
    };

    if doc.get("info").is_none() {
        return Err(SpecError::MissingInfo);
    }

    Ok(dialect)
}
