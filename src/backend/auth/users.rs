/**
 * User Store
 *
 * Persistent collection of team members. A user is created by the invite
 * tool with no password hash ("invited"); the first successful login sets
 * the hash ("activated"). Hashes are never cleared and users are never
 * deleted here.
 *
 * Two backends share one API:
 * - PostgreSQL (`DATABASE_URL` configured)
 * - in-memory map (tests, or a server started without a database)
 */

use chrono::{DateTime, Utc};
use sqlx::migrate::Migrator;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::error::StoreError;

/// Schema migrations embedded from `migrations/`
static MIGRATOR: Migrator = sqlx::migrate!();

/// Role given to every invited user
pub const DEFAULT_ROLE: &str = "member";

/// User struct representing a user in the database
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Unique username
    pub username: String,
    /// bcrypt hash, `None` until the account is activated
    pub password_hash: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    fn invited(username: &str, password_hash: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash,
            role: DEFAULT_ROLE.to_string(),
            created_at: Utc::now(),
        }
    }

    /// Whether the first login already set a password
    pub fn is_activated(&self) -> bool {
        self.password_hash.is_some()
    }
}

/// User store backend
#[derive(Debug, Clone)]
pub enum UserStore {
    Postgres(PgPool),
    Memory(Arc<RwLock<HashMap<String, User>>>),
}

impl UserStore {
    /// Empty in-memory store
    pub fn in_memory() -> Self {
        Self::Memory(Arc::new(RwLock::new(HashMap::new())))
    }

    /// Connect to PostgreSQL and run pending migrations
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(database_url).await?;
        let store = Self::Postgres(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Backend name for log lines
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }

    /// Apply pending schema migrations (no-op for the in-memory store)
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        if let Self::Postgres(pool) = self {
            tracing::info!("Running database migrations...");
            MIGRATOR.run(pool).await?;
            tracing::info!("Database migrations completed successfully");
        }
        Ok(())
    }

    /// Get user by username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        match self {
            Self::Postgres(pool) => {
                let user = sqlx::query_as::<_, User>(
                    r#"
                    SELECT id, username, password_hash, role, created_at
                    FROM users
                    WHERE username = $1
                    "#
                )
                .bind(username)
                .fetch_optional(pool)
                .await?;
                Ok(user)
            }
            Self::Memory(users) => Ok(users.read().await.get(username).cloned()),
        }
    }

    /// Create a user, or activate an invited one
    ///
    /// - unknown username: a new user is inserted with `password_hash`
    ///   (`None` records an invitation)
    /// - invited user and `Some(hash)`: the hash is set
    /// - anything else: `StoreError::Conflict`
    pub async fn create_or_activate(
        &self,
        username: &str,
        password_hash: Option<String>,
    ) -> Result<User, StoreError> {
        match self {
            Self::Postgres(pool) => pg_create_or_activate(pool, username, password_hash).await,
            Self::Memory(users) => {
                let mut users = users.write().await;
                match users.get_mut(username) {
                    Some(existing) if !existing.is_activated() && password_hash.is_some() => {
                        existing.password_hash = password_hash;
                        Ok(existing.clone())
                    }
                    Some(_) => Err(StoreError::conflict(username)),
                    None => {
                        let user = User::invited(username, password_hash);
                        users.insert(username.to_string(), user.clone());
                        Ok(user)
                    }
                }
            }
        }
    }
}

async fn pg_create_or_activate(
    pool: &PgPool,
    username: &str,
    password_hash: Option<String>,
) -> Result<User, StoreError> {
    if let Some(hash) = &password_hash {
        // Only an invited row can be activated; the IS NULL guard makes a
        // concurrent second activation fall through to Conflict.
        let activated = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET password_hash = $1
            WHERE username = $2 AND password_hash IS NULL
            RETURNING id, username, password_hash, role, created_at
            "#
        )
        .bind(hash)
        .bind(username)
        .fetch_optional(pool)
        .await?;

        if let Some(user) = activated {
            return Ok(user);
        }
    }

    let user = User::invited(username, password_hash);
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, password_hash, role, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, username, password_hash, role, created_at
        "#
    )
    .bind(user.id)
    .bind(&user.username)
    .bind(&user.password_hash)
    .bind(&user.role)
    .bind(user.created_at)
    .fetch_one(pool)
    .await
    .map_err(|e| classify_insert_error(e, username))
}

fn classify_insert_error(err: sqlx::Error, username: &str) -> StoreError {
    let duplicate = err
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation());
    if duplicate {
        StoreError::conflict(username)
    } else {
        StoreError::Database(err)
    }
}
