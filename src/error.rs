use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpecError {
    #[error("unable to parse specification as JSON or YAML (json: {json}; yaml: {yaml})")]
    Parse { json: String, yaml: String },

    #[error("unsupported specification dialect: expected `openapi: \"3.x\"` or `swagger: \"2.x\"`")]
    UnsupportedDialect,

    #[error("specification has no `info` object")]
    MissingInfo,

    #[error("failed to index route '{path}': {reason}")]
    RouteIndex { path: String, reason: String },

    #[error("no endpoint matches path: {0}")]
    EndpointNotFound(String),

    #[error("method {method} not allowed for path: {path}")]
    MethodNotAllowed { method: String, path: String },
}
