//! Boundary repair of raw payloads whose optional collections arrive null.
//!
//! Some server responses transmit optional nested sequences as `null`.
//! Before a raw payload is validated against a schema those fields are
//! rewritten to empty sequences. The typed model handles the same repair
//! at deserialization time; this pass exists for payloads kept as raw
//! JSON at the system boundary.

use serde_json::Value;

/// Dotted paths of the optional nested sequences per resource collection.
fn optional_sequences(collection: &str) -> &'static [&'static str] {
    match collection {
        "cluster" => &["instances"],
        "shared_rules" => &["default.light", "default.dark", "default.tap", "rules"],
        "route" => &["rules"],
        _ => &[],
    }
}

/// Replace null optional nested sequences with empty ones.
///
/// Accepts either a single resource object or a list-style payload and
/// rewrites in place. Idempotent; fields that are non-null are never
/// touched, and unknown collections pass through unchanged.
pub fn normalize(collection: &str, payload: &mut Value) {
    let paths = optional_sequences(collection);
    if paths.is_empty() {
        return;
    }

    match payload {
        Value::Array(elements) => {
            for element in elements {
                normalize_element(paths, element);
            }
        }
        Value::Object(_) => normalize_element(paths, payload),
        _ => {}
    }
}

fn normalize_element(paths: &[&str], element: &mut Value) {
    for path in paths {
        let pointer = format!("/{}", path.replace('.', "/"));
        if let Some(field) = element.pointer_mut(&pointer) {
            if field.is_null() {
                *field = Value::Array(Vec::new());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn repairs_null_instances_in_list_payload() {
        let mut payload = json!([
            { "cluster_key": "ck-1", "instances": null },
            { "cluster_key": "ck-2", "instances": [{"host": "h", "port": 80}] }
        ]);
        normalize("cluster", &mut payload);
        assert_eq!(payload[0]["instances"], json!([]));
        assert_eq!(payload[1]["instances"], json!([{"host": "h", "port": 80}]));
    }

    #[test]
    fn repairs_nested_default_vectors() {
        let mut payload = json!({
            "shared_rules_key": "srk-1",
            "default": { "light": [{"weight": 100}], "dark": null, "tap": null },
            "rules": null
        });
        normalize("shared_rules", &mut payload);
        assert_eq!(payload["default"]["dark"], json!([]));
        assert_eq!(payload["default"]["tap"], json!([]));
        assert_eq!(payload["rules"], json!([]));
        // non-null field untouched
        assert_eq!(payload["default"]["light"], json!([{"weight": 100}]));
    }

    #[test]
    fn repairs_nested_vectors_across_list_elements() {
        let mut payload = json!([
            {
                "shared_rules_key": "srk-1",
                "default": { "light": null, "dark": null, "tap": null },
                "rules": null
            },
            {
                "shared_rules_key": "srk-2",
                "default": { "light": [{"weight": 100}], "dark": [], "tap": null },
                "rules": [{"rule_key": "rk-1"}]
            }
        ]);
        normalize("shared_rules", &mut payload);
        for field in ["light", "dark", "tap"] {
            assert_eq!(payload[0]["default"][field], json!([]));
        }
        assert_eq!(payload[0]["rules"], json!([]));
        assert_eq!(payload[1]["default"]["light"], json!([{"weight": 100}]));
        assert_eq!(payload[1]["default"]["tap"], json!([]));
        assert_eq!(payload[1]["rules"], json!([{"rule_key": "rk-1"}]));
    }

    #[test]
    fn idempotent() {
        let mut payload = json!([{ "route_key": "rtk-1", "rules": null }]);
        normalize("route", &mut payload);
        let once = payload.clone();
        normalize("route", &mut payload);
        assert_eq!(payload, once);
    }

    #[test]
    fn never_removes_non_null_fields() {
        let original = json!({ "cluster_key": "ck-1", "name": "x", "instances": [] });
        let mut payload = original.clone();
        normalize("cluster", &mut payload);
        assert_eq!(payload, original);
    }

    #[test]
    fn unknown_collection_passes_through() {
        let original = json!({ "zone_key": "zk-1", "anything": null });
        let mut payload = original.clone();
        normalize("zone", &mut payload);
        assert_eq!(payload, original);
    }

    #[test]
    fn missing_field_left_missing() {
        let original = json!({ "cluster_key": "ck-1" });
        let mut payload = original.clone();
        normalize("cluster", &mut payload);
        assert_eq!(payload, original);
    }
}
