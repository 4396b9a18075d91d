use serde_json::Value;
use sqlx::PgPool;

use crate::models::field::FieldSpec;
use crate::models::user::{NewUser, User};

pub async fn list(db: &PgPool) -> sqlx::Result<Vec<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM mindfull_users")
        .fetch_all(db)
        .await
}

pub async fn insert(db: &PgPool, new_user: &NewUser) -> sqlx::Result<User> {
    sqlx::query_as::<_, User>(
        "INSERT INTO mindfull_users (username, pw) VALUES ($1, $2) RETURNING *",
    )
    .bind(&new_user.username)
    .bind(&new_user.pw)
    .fetch_one(db)
    .await
}

pub async fn get_by_id(db: &PgPool, id: i32) -> sqlx::Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM mindfull_users WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn delete_by_id(db: &PgPool, id: i32) -> sqlx::Result<u64> {
    let result = sqlx::query("DELETE FROM mindfull_users WHERE id = $1")
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
    super::update_row(db, "mindfull_users", id, changes).await
}
