use serde_json::Value;

use crate::models::field::FieldSpec;

/// First declared field the body leaves absent or explicitly null, if any.
/// Fields are checked in declaration order so the reported field is stable.
pub fn first_missing_field(body: &Value, fields: &[FieldSpec]) -> Option<&'static str> {
    fields.iter().find_map(|field| match body.get(field.name) {
        None | Some(Value::Null) => Some(field.name),
        Some(_) => None,
    })
}

/// Declared fields present in the body, paired with their submitted values.
/// Unknown body keys are dropped; explicit nulls are kept (they null the
/// column on update).
pub fn patch_fields<'a>(body: &Value, fields: &'a [FieldSpec]) -> Vec<(&'a FieldSpec, Value)> {
    fields
        .iter()
        .filter_map(|field| body.get(field.name).map(|value| (field, value.clone())))
        .collect()
}

/// JavaScript-style truthiness. The patch gate counts truthy values only, so
/// a body of nothing but `0`, `""`, `false` or `null` reads as "no updated
/// fields" even though those values would be forwarded to the update had the
/// gate passed. Kept intentionally; see DESIGN.md.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entry::ENTRY_FIELDS;
    use crate::models::user::USER_FIELDS;
    use serde_json::json;

    #[test]
    fn missing_field_reported_in_declaration_order() {
        let body = json!({ "pw": "123456" });
        assert_eq!(first_missing_field(&body, USER_FIELDS), Some("username"));

        let body = json!({ "username": "a", "pw": "b" });
        assert_eq!(first_missing_field(&body, USER_FIELDS), None);
    }

    #[test]
    fn explicit_null_counts_as_missing() {
        let body = json!({ "username": "a", "pw": null });
        assert_eq!(first_missing_field(&body, USER_FIELDS), Some("pw"));
    }

    #[test]
    fn entry_fields_check_starts_at_date_created() {
        assert_eq!(first_missing_field(&json!({}), ENTRY_FIELDS), Some("date_created"));
    }

    #[test]
    fn patch_fields_drops_unknown_keys() {
        let body = json!({ "username": "new", "fieldToIgnore": "x" });
        let changes = patch_fields(&body, USER_FIELDS);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].0.name, "username");
        assert_eq!(changes[0].1, json!("new"));
    }

    #[test]
    fn patch_fields_keeps_explicit_nulls() {
        let body = json!({ "notes": null, "mood": "Calm" });
        let changes = patch_fields(&body, ENTRY_FIELDS);
        let names: Vec<_> = changes.iter().map(|(f, _)| f.name).collect();
        assert_eq!(names, vec!["mood", "notes"]);
    }

    #[test]
    fn falsy_values_are_not_truthy() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
    }

    #[test]
    fn ordinary_values_are_truthy() {
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!(5)));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
    }
}
