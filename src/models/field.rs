use serde_json::{Map, Value};

use crate::sanitize::escape_html;

/// How a field binds against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
}

/// One writable field of a resource. Each resource declares its fields once,
/// in the order missing-field errors are reported, and both the request
/// validator and the response serializer consult the same table.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Escaped on output. Ids, numbers and machine-formatted strings pass
    /// through unchanged.
    pub sanitize: bool,
}

impl FieldSpec {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            sanitize: true,
        }
    }

    pub const fn raw_text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            sanitize: false,
        }
    }

    pub const fn integer(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Integer,
            sanitize: false,
        }
    }
}

/// Maps a stored record to its wire shape: `id` plus exactly the declared
/// fields, free text escaped. Anything else on the record is dropped.
/// Sanitization happens here, on output only; rows keep whatever was
/// submitted.
pub fn to_wire(record: Value, fields: &[FieldSpec]) -> Value {
    let mut out = Map::new();
    if let Some(id) = record.get("id") {
        out.insert("id".to_string(), id.clone());
    }
    for field in fields {
        let value = record.get(field.name).cloned().unwrap_or(Value::Null);
        let value = match value {
            Value::String(s) if field.sanitize => Value::String(escape_html(&s)),
            other => other,
        };
        out.insert(field.name.to_string(), value);
    }
    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FIELDS: &[FieldSpec] = &[FieldSpec::text("title"), FieldSpec::integer("rank")];

    #[test]
    fn to_wire_keeps_only_declared_fields_and_id() {
        let wire = to_wire(
            json!({ "id": 7, "title": "hi", "rank": 3, "secret": "x" }),
            FIELDS,
        );
        assert_eq!(wire, json!({ "id": 7, "title": "hi", "rank": 3 }));
    }

    #[test]
    fn to_wire_escapes_sanitized_text() {
        let wire = to_wire(json!({ "id": 1, "title": "<b>hi</b>", "rank": 0 }), FIELDS);
        assert_eq!(wire["title"], "&lt;b&gt;hi&lt;/b&gt;");
    }

    #[test]
    fn to_wire_leaves_numbers_untouched() {
        let wire = to_wire(json!({ "id": 1, "title": "t", "rank": 42 }), FIELDS);
        assert_eq!(wire["rank"], 42);
    }
}
