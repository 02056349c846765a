use api_contract::{ErrorEnvelope, ErrorObject};
use serde_json::json;

#[test]
fn single_error_uses_string_status() {
    let envelope = ErrorEnvelope::single(400, "Missing or incorrect report url.");
    let value = serde_json::to_value(envelope).expect("serialize");
    assert_eq!(
        value,
        json!({
            "errors": [{ "status": "400", "title": "Missing or incorrect report url." }]
        })
    );
}

#[test]
fn supplied_error_list_is_kept() {
    let envelope = ErrorEnvelope {
        errors: vec![
            ErrorObject::new(400, "first"),
            ErrorObject::new(401, "second"),
        ],
    };
    let value = serde_json::to_value(envelope).expect("serialize");
    let errors = value["errors"].as_array().expect("errors");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[1]["status"], "401");
}
