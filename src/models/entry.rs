use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlx::FromRow;

use crate::models::field::{to_wire, FieldSpec};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Entry {
    pub id: i32,
    pub date_created: String,
    pub month_created: String,
    pub mood: String,
    pub stress_level: i32,
    pub gratitude1: String,
    pub gratitude2: String,
    pub gratitude3: String,
    pub notes: String,
    pub userid: i32,
}

#[derive(Debug, Deserialize)]
pub struct NewEntry {
    pub date_created: String,
    pub month_created: String,
    pub mood: String,
    pub stress_level: i32,
    pub gratitude1: String,
    pub gratitude2: String,
    pub gratitude3: String,
    pub notes: String,
    pub userid: i32,
}

/// Writable entry fields, in the order missing-field errors are reported.
/// `date_created` carries a client-formatted date string and is not escaped
/// on output; the free-text fields are.
pub const ENTRY_FIELDS: &[FieldSpec] = &[
    FieldSpec::raw_text("date_created"),
    FieldSpec::text("month_created"),
    FieldSpec::text("mood"),
    FieldSpec::integer("stress_level"),
    FieldSpec::text("gratitude1"),
    FieldSpec::text("gratitude2"),
    FieldSpec::text("gratitude3"),
    FieldSpec::text("notes"),
    FieldSpec::integer("userid"),
];

pub fn serialize_entry(entry: &Entry) -> Value {
    to_wire(
        json!({
            "id": entry.id,
            "date_created": entry.date_created,
            "month_created": entry.month_created,
            "mood": entry.mood,
            "stress_level": entry.stress_level,
            "gratitude1": entry.gratitude1,
            "gratitude2": entry.gratitude2,
            "gratitude3": entry.gratitude3,
            "notes": entry.notes,
            "userid": entry.userid,
        }),
        ENTRY_FIELDS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Entry {
        Entry {
            id: 2,
            date_created: "1/1/2021".into(),
            month_created: "January".into(),
            mood: "Happy".into(),
            stress_level: 5,
            gratitude1: "A".into(),
            gratitude2: "B".into(),
            gratitude3: "C".into(),
            notes: "test".into(),
            userid: 1,
        }
    }

    #[test]
    fn serialized_entry_round_trips_plain_fields() {
        assert_eq!(
            serialize_entry(&sample()),
            json!({
                "id": 2,
                "date_created": "1/1/2021",
                "month_created": "January",
                "mood": "Happy",
                "stress_level": 5,
                "gratitude1": "A",
                "gratitude2": "B",
                "gratitude3": "C",
                "notes": "test",
                "userid": 1,
            })
        );
    }

    #[test]
    fn serialized_entry_escapes_free_text_only() {
        let mut entry = sample();
        entry.notes = "<script>bad()</script>".into();
        entry.mood = "\"tired\"".into();
        let wire = serialize_entry(&entry);
        assert_eq!(wire["notes"], "&lt;script&gt;bad()&lt;/script&gt;");
        assert_eq!(wire["mood"], "&quot;tired&quot;");
        // ids and numbers pass through raw
        assert_eq!(wire["stress_level"], 5);
        assert_eq!(wire["userid"], 1);
        assert_eq!(wire["date_created"], "1/1/2021");
    }
}
