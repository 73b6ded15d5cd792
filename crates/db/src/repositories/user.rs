use crate::models::DbUser;
use chrono::Utc;
use clinicdesk_core::models::user::Role;
use eyre::Result;
use sqlx::{Executor, Pool, Sqlite};

pub async fn create_user(
    pool: &Pool<Sqlite>,
    username: &str,
    password_hash: &str,
    role: Role,
) -> Result<DbUser> {
    insert_user(pool, username, password_hash, role).await
}

/// Shared by the doctor and patient repositories so the account row can be
/// written inside their transactions.
pub(crate) async fn insert_user<'e, E>(
    executor: E,
    username: &str,
    password_hash: &str,
    role: Role,
) -> Result<DbUser>
where
    E: Executor<'e, Database = Sqlite>,
{
    tracing::debug!("Creating user: username={}, role={}", username, role);

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (username, password_hash, role, created_at)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING user_id, username, password_hash, role, created_at
        "#,
    )
    .bind(username)
    .bind(password_hash)
    .bind(role.as_str())
    .bind(Utc::now())
    .fetch_one(executor)
    .await?;

    Ok(user)
}

pub async fn find_by_username(pool: &Pool<Sqlite>, username: &str) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT user_id, username, password_hash, role, created_at
        FROM users
        WHERE username = ?1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn get_all_users(pool: &Pool<Sqlite>) -> Result<Vec<DbUser>> {
    let users = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT user_id, username, password_hash, role, created_at
        FROM users
        ORDER BY user_id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}

pub async fn delete_user(pool: &Pool<Sqlite>, user_id: i64) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM users
        WHERE user_id = ?1
        "#,
    )
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
