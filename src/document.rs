use crate::extractors::RequestBodyExtractor;
use crate::spec::detector::SpecDialect;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// HTTP methods recognized inside a `paths` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    DELETE,
    PATCH,
    HEAD,
    OPTIONS,
    TRACE,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GET => "GET",
            Self::POST => "POST",
            Self::PUT => "PUT",
            Self::DELETE => "DELETE",
            Self::PATCH => "PATCH",
            Self::HEAD => "HEAD",
            Self::OPTIONS => "OPTIONS",
            Self::TRACE => "TRACE",
        }
    }
}

impl FromStr for HttpMethod {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Self::GET),
            "POST" => Ok(Self::POST),
            "PUT" => Ok(Self::PUT),
            "DELETE" => Ok(Self::DELETE),
            "PATCH" => Ok(Self::PATCH),
            "HEAD" => Ok(Self::HEAD),
            "OPTIONS" => Ok(Self::OPTIONS),
            "TRACE" => Ok(Self::TRACE),
            _ => Err(()),
        }
    }
}

/// A fully resolved specification document together with the descriptive
/// metadata the presentation layer shows.
///
/// Serializes to the collaborator contract: `title`, `version`,
/// `description`, `spec_type` (`"openapi"`/`"swagger"`), `spec_content`
/// (the original raw text) and the resolved tree under `parsedSpec`.
#[derive(Serialize)]
pub struct ApiDocument {
    pub title: String,
    pub version: String,
    pub description: String,
    pub spec_type: SpecDialect,
    /// Original raw text, kept for re-display and debugging.
    pub spec_content: String,
    /// The resolved tree: `paths` plus every other top-level field.
    #[serde(rename = "parsedSpec")]
    pub parsed_spec: Value,
    #[serde(skip)]
    extractor: &'static (dyn RequestBodyExtractor + Send + Sync),
}

impl fmt::Debug for ApiDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiDocument")
            .field("title", &self.title)
            .field("version", &self.version)
            .field("spec_type", &self.spec_type)
            .finish_non_exhaustive()
    }
}

impl ApiDocument {
    pub(crate) fn new(
        title: String,
        version: String,
        description: String,
        spec_type: SpecDialect,
        spec_content: String,
        parsed_spec: Value,
    ) -> Self {
        Self {
            title,
            version,
            description,
            extractor: spec_type.request_body_extractor(),
            spec_type,
            spec_content,
            parsed_spec,
        }
    }

    /// The resolved `paths` mapping, when the document has one.
    pub fn paths(&self) -> Option<&Map<String, Value>> {
        self.parsed_spec.get("paths").and_then(Value::as_object)
    }

    /// Every path with its recognized HTTP methods, in document order.
    ///
    /// Non-method keys on a path item (`parameters`, `summary`, `x-*` and
    /// friends) are skipped.
    pub fn endpoints(&self) -> IndexMap<String, Vec<HttpMethod>> {
        let mut endpoints = IndexMap::new();
        let Some(paths) = self.paths() else {
            return endpoints;
        };

        for (path, item) in paths {
            let methods = item
                .as_object()
                .map(|entry| {
                    entry
                        .keys()
                        .filter_map(|key| HttpMethod::from_str(key).ok())
                        .collect()
                })
                .unwrap_or_default();
            endpoints.insert(path.clone(), methods);
        }
        endpoints
    }

    /// Looks up one operation. The method key match is ASCII
    /// case-insensitive since sloppy documents capitalize verbs.
    pub fn operation(&self, path: &str, method: HttpMethod) -> Option<Operation<'_>> {
        let item = self.paths()?.get(path)?.as_object()?;
        item.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(method.as_str()))
            .map(|(_, raw)| Operation { raw })
    }

    /// Normalized request-body data for an operation, produced by the
    /// extractor of the dialect this document was loaded as.
    pub fn extract_request_body(&self, operation: &Value) -> Option<Value> {
        self.extractor.extract_request_body(self, operation)
    }

    /// [`extract_request_body`](Self::extract_request_body) by endpoint key.
    pub fn request_body(&self, path: &str, method: HttpMethod) -> Option<Value> {
        let operation = self.operation(path, method)?;
        self.extract_request_body(operation.raw())
    }
}

/// Borrowed view of one operation object inside a document's `paths`;
/// never copied out of the tree.
#[derive(Debug, Clone, Copy)]
pub struct Operation<'a> {
    raw: &'a Value,
}

impl<'a> Operation<'a> {
    pub fn raw(&self) -> &'a Value {
        self.raw
    }

    pub fn description(&self) -> Option<&'a str> {
        self.raw.get("description").and_then(Value::as_str)
    }

    /// All declared parameters; absent means an empty list.
    pub fn parameters(&self) -> Vec<&'a Value> {
        self.raw
            .get("parameters")
            .and_then(Value::as_array)
            .map(|params| params.iter().collect())
            .unwrap_or_default()
    }

    /// Parameters for the parameter table: everything except `body`.
    pub fn non_body_parameters(&self) -> Vec<&'a Value> {
        self.parameters()
            .into_iter()
            .filter(|param| param.get("in").and_then(Value::as_str) != Some("body"))
            .collect()
    }

    /// Response objects keyed by status-code string.
    pub fn responses(&self) -> Option<&'a Map<String, Value>> {
        self.raw.get("responses").and_then(Value::as_object)
    }

    /// Names of the security schemes this operation requires: the single
    /// key of each requirement object.
    pub fn security(&self) -> Vec<&'a str> {
        self.raw
            .get("security")
            .and_then(Value::as_array)
            .map(|schemes| {
                schemes
                    .iter()
                    .filter_map(|scheme| scheme.as_object())
                    .filter_map(|scheme| scheme.keys().next())
                    .map(String::as_str)
                    .collect()
            })
            .unwrap_or_default()
    }
}
