use sqlx::SqlitePool;

/// Create the tables if they don't exist. The unique constraints on email
/// and phone are the authoritative duplicate check; the pre-insert lookups
/// in the handlers only provide the friendlier error path.
pub async fn ensure_schema(db: &SqlitePool) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            full_name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL,
            phone TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(db)
    .await?;

    // Stubbed: no endpoint writes or reads this table yet.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS profile (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            profile_picture TEXT NOT NULL
        )
        "#,
    )
    .execute(db)
    .await?;

    Ok(())
}
