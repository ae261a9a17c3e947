use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

/// User record in the database.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    /// Unique across all rows.
    pub email: String,
    /// Stored exactly as received. Hashing is out of scope for this service;
    /// never expose this field in a response.
    #[serde(skip_serializing)]
    pub password: String,
    /// Unique across all rows.
    pub phone: String,
}

impl User {
    /// Find a user by email.
    pub async fn find_by_email(db: &SqlitePool, email: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, full_name, email, password, phone
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    /// Find a user by phone number.
    pub async fn find_by_phone(db: &SqlitePool, phone: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, full_name, email, password, phone
            FROM users
            WHERE phone = $1
            "#,
        )
        .bind(phone)
        .fetch_optional(db)
        .await
    }

    /// Primary-key lookup.
    pub async fn find_by_id(db: &SqlitePool, id: i64) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, full_name, email, password, phone
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Insert a new user and return the persisted row with its assigned id.
    pub async fn create(
        db: &SqlitePool,
        full_name: &str,
        email: &str,
        password: &str,
        phone: &str,
    ) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (full_name, email, password, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING id, full_name, email, password, phone
            "#,
        )
        .bind(full_name)
        .bind(email)
        .bind(password)
        .bind(phone)
        .fetch_one(db)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::schema::ensure_schema;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        ensure_schema(&db).await.expect("schema");
        db
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let db = test_pool().await;
        let first = User::create(&db, "Ada", "ada@example.com", "pw", "+1")
            .await
            .unwrap();
        let second = User::create(&db, "Grace", "grace@example.com", "pw", "+2")
            .await
            .unwrap();
        assert!(first.id > 0);
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn lookups_match_exactly() {
        let db = test_pool().await;
        let created = User::create(&db, "Ada", "ada@example.com", "pw", "+1")
            .await
            .unwrap();

        let by_email = User::find_by_email(&db, "ada@example.com").await.unwrap();
        assert_eq!(by_email.map(|u| u.id), Some(created.id));

        let by_phone = User::find_by_phone(&db, "+1").await.unwrap();
        assert_eq!(by_phone.map(|u| u.id), Some(created.id));

        let by_id = User::find_by_id(&db, created.id).await.unwrap().unwrap();
        assert_eq!(by_id.full_name, "Ada");
        assert_eq!(by_id.email, "ada@example.com");

        assert!(User::find_by_email(&db, "nobody@example.com")
            .await
            .unwrap()
            .is_none());
        assert!(User::find_by_id(&db, 999_999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_email_insert_maps_to_email_taken() {
        let db = test_pool().await;
        User::create(&db, "Ada", "ada@example.com", "pw", "+1")
            .await
            .unwrap();

        let err = User::create(&db, "Imposter", "ada@example.com", "pw", "+2")
            .await
            .unwrap_err();
        assert!(matches!(ApiError::from_insert(err), ApiError::EmailTaken));
    }

    #[tokio::test]
    async fn duplicate_phone_insert_maps_to_phone_taken() {
        let db = test_pool().await;
        User::create(&db, "Ada", "ada@example.com", "pw", "+1")
            .await
            .unwrap();

        let err = User::create(&db, "Imposter", "other@example.com", "pw", "+1")
            .await
            .unwrap_err();
        assert!(matches!(ApiError::from_insert(err), ApiError::PhoneTaken));
    }
}
