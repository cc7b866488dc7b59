use secrecy::{ExposeSecret, Secret};
use sqlx::{FromRow, PgPool};
use turnstile_core::{Email, PasswordHash, User, UserStore, UserStoreError};

/// `register` table in PostgreSQL.
///
/// The table has no unique constraint on `email`; the store inserts whatever
/// it is given.
#[derive(Debug, Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresUserStore { pool }
    }
}

// Name columns are nullable: older rows were written without them.
#[derive(FromRow)]
struct RegisterRow {
    fname: Option<String>,
    lname: Option<String>,
    email: String,
    password: String,
}

impl From<RegisterRow> for User {
    fn from(row: RegisterRow) -> Self {
        User::new(
            row.fname.unwrap_or_default(),
            row.lname.unwrap_or_default(),
            Email::from(Secret::from(row.email)),
            PasswordHash::from(Secret::from(row.password)),
        )
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query_as::<_, RegisterRow>(
            r#"
                SELECT fname, lname, email, password
                FROM register
                WHERE email = $1
                LIMIT 1
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::Unavailable(e.to_string()))?;

        Ok(row.map(User::from))
    }

    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn insert(&self, user: User) -> Result<(), UserStoreError> {
        sqlx::query(
            r#"
                INSERT INTO register (fname, lname, email, password)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.first_name())
        .bind(user.last_name())
        .bind(user.email().as_ref().expose_secret())
        .bind(user.password_hash().as_ref().expose_secret())
        .execute(&self.pool)
        .await
        .map_err(|e| UserStoreError::Unavailable(e.to_string()))?;

        Ok(())
    }
}
