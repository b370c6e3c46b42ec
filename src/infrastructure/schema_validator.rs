use anyhow::{anyhow, Result};
use jsonschema::{Draft, JSONSchema};
use once_cell::sync::Lazy;
use serde_json::Value;

static BOOKMARK_TREE_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    let schema_content = include_str!("../schemas/bookmark_tree_schema.json");
    let schema: Value = serde_json::from_str(schema_content).expect("Invalid bookmark tree schema");
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("Failed to compile bookmark tree schema")
});

/// Validate a JSON bookmark tree against the bundled schema
pub fn validate_tree_json(tree: &Value) -> Result<()> {
    match BOOKMARK_TREE_SCHEMA.validate(tree) {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_list: Vec<String> = errors.map(|e| e.to_string()).collect();
            Err(anyhow!(
                "Bookmark tree validation failed:\n{}",
                error_list.join("\n")
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_nested_folders_and_empty_objects() {
        validate_tree_json(&json!({})).expect("empty tree");
        validate_tree_json(&json!({
            "Work": {"Docs": "http://x", "Deeper": {"Leaf": "http://y"}},
            "Empty": {},
            "Top": "http://t"
        }))
        .expect("nested tree");
    }

    #[test]
    fn rejects_non_string_leaves() {
        let err = validate_tree_json(&json!({"Work": {"Docs": 42}}))
            .unwrap_err()
            .to_string();
        assert!(err.contains("validation failed"));

        assert!(validate_tree_json(&json!(["a"])).is_err());
        assert!(validate_tree_json(&json!({"a": [1]})).is_err());
    }
}
