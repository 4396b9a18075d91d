pub mod entries;
pub mod users;

use serde_json::Value;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::field::{FieldKind, FieldSpec};

/// Runs one UPDATE statement setting exactly the given fields. Values bind by
/// the field's declared kind so Postgres can type the parameters; JSON null
/// (and any value of the wrong shape) binds as SQL NULL. Callers guarantee
/// `changes` is non-empty.
pub(crate) async fn update_row(
    db: &PgPool,
    table: &str,
    id: i32,
    changes: &[(&FieldSpec, Value)],
) -> sqlx::Result<u64> {
    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE ");
    builder.push(table);
    builder.push(" SET ");

    let mut assignments = builder.separated(", ");
    for (field, value) in changes {
        assignments.push(field.name);
        assignments.push_unseparated(" = ");
        match field.kind {
            FieldKind::Text => {
                assignments.push_bind_unseparated(value.as_str().map(str::to_owned));
            }
            FieldKind::Integer => {
                assignments.push_bind_unseparated(value.as_i64().map(|n| n as i32));
            }
        }
    }

    builder.push(" WHERE id = ");
    builder.push_bind(id);

    let result = builder.build().execute(db).await?;
    Ok(result.rows_affected())
}
