use serde_json::Value;
use sqlx::PgPool;

use crate::models::entry::{Entry, NewEntry};
use crate::models::field::FieldSpec;

pub async fn list(db: &PgPool) -> sqlx::Result<Vec<Entry>> {
    sqlx::query_as::<_, Entry>("SELECT * FROM mindfull_entries")
        .fetch_all(db)
        .await
}

pub async fn insert(db: &PgPool, new_entry: &NewEntry) -> sqlx::Result<Entry> {
    sqlx::query_as::<_, Entry>(
        r#"
        INSERT INTO mindfull_entries
            (date_created, month_created, mood, stress_level,
             gratitude1, gratitude2, gratitude3, notes, userid)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(&new_entry.date_created)
    .bind(&new_entry.month_created)
    .bind(&new_entry.mood)
    .bind(new_entry.stress_level)
    .bind(&new_entry.gratitude1)
    .bind(&new_entry.gratitude2)
    .bind(&new_entry.gratitude3)
    .bind(&new_entry.notes)
    .bind(new_entry.userid)
    .fetch_one(db)
    .await
}

pub async fn get_by_id(db: &PgPool, id: i32) -> sqlx::Result<Option<Entry>> {
    sqlx::query_as::<_, Entry>("SELECT * FROM mindfull_entries WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn delete_by_id(db: &PgPool, id: i32) -> sqlx::Result<u64> {
    let result = sqlx::query("DELETE FROM mindfull_entries WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;

    Ok(result.rows_affected())
}

pub async fn update(
    db: &PgPool,
    id: i32,
    changes: &[(&FieldSpec, Value)],
) -> sqlx::Result<u64> {
    super::update_row(db, "mindfull_entries", id, changes).await
}
