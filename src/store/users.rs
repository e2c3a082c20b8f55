use crate::error::AppError;
use crate::models::User;
use sqlx::PgPool;

/// User persistence operations.
///
/// Constructed from an injected [`PgPool`] and shared through `web::Data`;
/// all user SQL lives here rather than in the route handlers.
#[derive(Clone)]
pub struct UserStore {
    pool: PgPool,
}

impl UserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let existing = sqlx::query_as::<_, (String,)>("SELECT email FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(existing.is_some())
    }

    /// Inserts a new user record.
    ///
    /// The unique index on `email` backs up the handler's pre-check: two
    /// concurrent signups for the same address race past the check, and the
    /// loser's constraint violation still surfaces as `DuplicateEmail`.
    pub async fn insert(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<(), AppError> {
        sqlx::query("INSERT INTO users (username, email, password_hash) VALUES ($1, $2, $3)")
            .bind(username)
            .bind(email)
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.kind() == sqlx::error::ErrorKind::UniqueViolation {
                        return AppError::DuplicateEmail;
                    }
                }
                AppError::from(e)
            })?;

        Ok(())
    }

    /// Looks up a user by email (exact, case-sensitive match).
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT username, email, password_hash, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
