use crate::document::ApiDocument;
use crate::error::SpecError;
use crate::spec::detector::detect_dialect;
use crate::spec::resolver::resolve_document_refs;
use serde_json::Value;
use tracing::debug;

/// Loads raw specification text into a fully resolved [`ApiDocument`].
///
/// The text is parsed as JSON first and as YAML only when that fails; not
/// every parser treats JSON as valid YAML, so the stricter attempt has to
/// go first. Dialect detection runs before resolution so malformed or
/// unsupported documents never pay the resolution cost.
///
/// # Errors
/// `Parse` when the text is neither valid JSON nor valid YAML;
/// `UnsupportedDialect` and `MissingInfo` from dialect detection.
pub fn load_spec(raw_text: &str) -> Result<ApiDocument, SpecError> {
    let parsed = parse_tree(raw_text)?;
    let dialect = detect_dialect(&parsed)?;
    debug!(dialect = dialect.as_str(), "detected specification dialect");

    let resolved = resolve_document_refs(&parsed, &parsed);
    debug!("resolved document references");

    let info = resolved.get("info");
    let field = |name: &str| {
        info.and_then(|i| i.get(name))
            .and_then(Value::as_str)
            .map(str::to_string)
    };

    Ok(ApiDocument::new(
        field("title").unwrap_or_else(|| "Untitled API".to_string()),
        field("version").unwrap_or_default(),
        field("description").unwrap_or_default(),
        dialect,
        raw_text.to_string(),
        resolved,
    ))
}

fn parse_tree(raw_text: &str) -> Result<Value, SpecError> {
    match serde_json::from_str(raw_text) {
        Ok(tree) => Ok(tree),
        Err(json_err) => serde_yaml::from_str(raw_text).map_err(|yaml_err| SpecError::Parse {
            json: json_err.to_string(),
            yaml: yaml_err.to_string(),
        }),
    }
}
