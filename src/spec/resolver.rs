use serde_json::{Map, Value};

/// Key marking a node whose pointer chain referred back into its own
/// expansion. The target is left unresolved instead of recursing forever.
pub const CYCLE_MARKER_KEY: &str = "x-circular-ref";

const REF_KEY: &str = "$ref";

/// Resolves every `$ref` in `value` against the whole document.
///
/// Fragments (`#/a/b/c`) are walked from the document root, so OpenAPI
/// `#/components/schemas/User` and Swagger `#/definitions/User` both land
/// on their target. A pointer whose target does not exist resolves to
/// `Null` rather than failing; a partially broken document still produces
/// a displayable tree.
pub fn resolve_document_refs(doc: &Value, value: &Value) -> Value {
    resolve_value(doc, value, false, &mut Vec::new())
}

/// Resolves every `$ref` in `value` against a shared schema container
/// (Swagger `definitions` or OpenAPI `components`).
///
/// Fragments are still written from the document root, so a leading
/// `definitions`/`components` segment is dropped before the walk: the
/// namespace already starts one level in.
pub fn resolve_shared_refs(shared: &Value, value: &Value) -> Value {
    resolve_value(shared, value, true, &mut Vec::new())
}

fn resolve_value(
    namespace: &Value,
    value: &Value,
    shared: bool,
    in_flight: &mut Vec<String>,
) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| resolve_value(namespace, item, shared, in_flight))
                .collect(),
        ),
        Value::Object(map) => match pointer_fragment(map) {
            Some(fragment) => {
                if in_flight.iter().any(|f| f == fragment) {
                    let mut marker = Map::new();
                    marker.insert(
                        CYCLE_MARKER_KEY.to_string(),
                        Value::String(fragment.to_string()),
                    );
                    return Value::Object(marker);
                }

                in_flight.push(fragment.to_string());
                let target = lookup(namespace, fragment, shared);
                // The pointer node is replaced wholesale; sibling keys are
                // discarded, and the target is resolved transitively.
                let resolved = resolve_value(namespace, &target, shared, in_flight);
                in_flight.pop();
                resolved
            }
            None => Value::Object(
                map.iter()
                    .map(|(key, val)| {
                        (key.clone(), resolve_value(namespace, val, shared, in_flight))
                    })
                    .collect(),
            ),
        },
        scalar => scalar.clone(),
    }
}

/// A pointer node carries a non-empty string `$ref`; anything else is
/// traversed as an ordinary mapping.
fn pointer_fragment(map: &Map<String, Value>) -> Option<&str> {
    match map.get(REF_KEY) {
        Some(Value::String(fragment)) if !fragment.is_empty() => Some(fragment),
        _ => None,
    }
}

/// Walks `fragment` segment by segment through `namespace`, each step a
/// key or index lookup. Any miss, including references that are not
/// same-document fragments, yields `Null`.
fn lookup(namespace: &Value, fragment: &str, shared: bool) -> Value {
    let Some(path) = fragment.strip_prefix("#/") else {
        return Value::Null;
    };

    let mut segments = path.split('/').peekable();
    if shared {
        if let Some(first) = segments.peek() {
            if *first == "definitions" || *first == "components" {
                segments.next();
            }
        }
    }

    let mut cursor = Some(namespace);
    for segment in segments {
        cursor = cursor.and_then(|node| match node {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        });
    }

    cursor.cloned().unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn leaves_pointer_free_trees_untouched() {
        let doc = json!({"a": [1, 2, {"b": "c"}], "d": null, "e": true});
        assert_eq!(resolve_document_refs(&doc, &doc), doc);
    }

    #[test]
    fn inlines_nested_pointers_transitively() {
        let doc = json!({
            "definitions": {
                "Pet": {
                    "type": "object",
                    "properties": {"owner": {"$ref": "#/definitions/Owner"}}
                },
                "Owner": {"type": "string"}
            },
            "schema": {"$ref": "#/definitions/Pet"}
        });
        let resolved = resolve_document_refs(&doc, &doc);
        assert_eq!(
            resolved["schema"]["properties"]["owner"],
            json!({"type": "string"})
        );
        assert_eq!(
            resolved["definitions"]["Pet"]["properties"]["owner"],
            json!({"type": "string"})
        );
    }

    #[test]
    fn dangling_pointer_resolves_to_null() {
        let value = json!({"$ref": "#/x/y"});
        assert_eq!(resolve_document_refs(&json!({}), &value), Value::Null);
    }

    #[test]
    fn external_reference_resolves_to_null() {
        let value = json!({"$ref": "http://example.com/spec.json#/User"});
        assert_eq!(resolve_document_refs(&json!({}), &value), Value::Null);
    }

    #[test]
    fn pointer_node_is_replaced_not_merged() {
        let doc = json!({"definitions": {"User": {"type": "object"}}});
        let value = json!({"$ref": "#/definitions/User", "description": "sibling"});
        assert_eq!(resolve_document_refs(&doc, &value), json!({"type": "object"}));
    }

    #[test]
    fn sequences_resolve_in_order() {
        let doc = json!({"a": 1, "b": 2});
        let value = json!([{"$ref": "#/b"}, {"$ref": "#/a"}, 3]);
        assert_eq!(resolve_document_refs(&doc, &value), json!([2, 1, 3]));
    }

    #[test]
    fn non_string_ref_is_an_ordinary_mapping() {
        let value = json!({"$ref": {"nested": true}});
        assert_eq!(resolve_document_refs(&json!({}), &value), value);
    }

    #[test]
    fn shared_lookup_drops_leading_container_segment() {
        let shared = json!({"User": {"type": "object"}});
        let value = json!({"$ref": "#/definitions/User"});
        assert_eq!(
            resolve_shared_refs(&shared, &value),
            json!({"type": "object"})
        );

        let shared = json!({"schemas": {"User": {"type": "object"}}});
        let value = json!({"$ref": "#/components/schemas/User"});
        assert_eq!(
            resolve_shared_refs(&shared, &value),
            json!({"type": "object"})
        );
    }

    #[test]
    fn document_lookup_keeps_all_segments() {
        let doc = json!({"definitions": {"User": {"type": "object"}}});
        let value = json!({"$ref": "#/definitions/User"});
        assert_eq!(resolve_document_refs(&doc, &value), json!({"type": "object"}));
    }

    #[test]
    fn segments_index_into_sequences() {
        let doc = json!({"servers": [{"url": "a"}, {"url": "b"}]});
        let value = json!({"$ref": "#/servers/1/url"});
        assert_eq!(resolve_document_refs(&doc, &value), json!("b"));
    }

    #[test]
    fn cyclic_pointer_yields_marker() {
        let doc = json!({
            "definitions": {
                "Node": {
                    "type": "object",
                    "properties": {"next": {"$ref": "#/definitions/Node"}}
                }
            }
        });
        let resolved = resolve_document_refs(&doc, &json!({"$ref": "#/definitions/Node"}));
        assert_eq!(resolved["type"], json!("object"));
        assert_eq!(
            resolved["properties"]["next"][CYCLE_MARKER_KEY],
            json!("#/definitions/Node")
        );
    }

    #[test]
    fn mutually_recursive_pointers_terminate() {
        let doc = json!({
            "definitions": {
                "A": {"child": {"$ref": "#/definitions/B"}},
                "B": {"child": {"$ref": "#/definitions/A"}}
            }
        });
        let resolved = resolve_document_refs(&doc, &json!({"$ref": "#/definitions/A"}));
        assert_eq!(
            resolved["child"]["child"][CYCLE_MARKER_KEY],
            json!("#/definitions/A")
        );
    }

    #[test]
    fn resolution_is_idempotent_on_acyclic_trees() {
        let doc = json!({
            "definitions": {"User": {"type": "object"}},
            "paths": {
                "/u": {"get": {"schema": {"$ref": "#/definitions/User"}}}
            }
        });
        let once = resolve_document_refs(&doc, &doc);
        let twice = resolve_document_refs(&doc, &once);
        assert_eq!(once, twice);
    }
}
