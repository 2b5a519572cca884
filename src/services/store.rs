use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::models::{NewVolunteer, Role, Volunteer, SEED_ROLES};

/// Errors that can occur when interacting with the store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// SQLite-backed store for volunteers, roles and placements
///
/// Created once at startup and shared by every worker. Lists come back in
/// insertion (id) order, which the matcher relies on for tie-breaking.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `database_url` and run migrations
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout_secs: u64,
    ) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(acquire_timeout_secs))
            .connect_with(options)
            .await?;

        Self::from_pool(pool).await
    }

    /// Private in-memory database, used by tests
    ///
    /// Every SQLite connection to `:memory:` is its own database, so the pool
    /// is pinned to a single connection that never expires.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::from_pool(pool).await
    }

    async fn from_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    /// All volunteers in insertion order
    pub async fn list_volunteers(&self) -> Result<Vec<Volunteer>, StoreError> {
        let volunteers = sqlx::query_as::<_, Volunteer>(
            "SELECT id, name, email, skills FROM volunteer ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!("Loaded {} volunteers", volunteers.len());

        Ok(volunteers)
    }

    pub async fn get_volunteer(&self, id: i64) -> Result<Volunteer, StoreError> {
        sqlx::query_as::<_, Volunteer>("SELECT id, name, email, skills FROM volunteer WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("volunteer {}", id)))
    }

    pub async fn create_volunteer(&self, volunteer: &NewVolunteer) -> Result<Volunteer, StoreError> {
        let query = r#"
            INSERT INTO volunteer (name, email, skills)
            VALUES (?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&volunteer.name)
            .bind(&volunteer.email)
            .bind(&volunteer.skills)
            .execute(&self.pool)
            .await?;

        let id = result.last_insert_rowid();
        tracing::debug!("Created volunteer {} ({})", id, volunteer.email);

        Ok(Volunteer {
            id,
            name: volunteer.name.clone(),
            email: volunteer.email.clone(),
            skills: volunteer.skills.clone(),
        })
    }

    /// Overwrite name, email and the whole skills list
    pub async fn update_volunteer(&self, id: i64, volunteer: &NewVolunteer) -> Result<Volunteer, StoreError> {
        let query = r#"
            UPDATE volunteer
            SET name = ?, email = ?, skills = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&volunteer.name)
            .bind(&volunteer.email)
            .bind(&volunteer.skills)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("volunteer {}", id)));
        }

        tracing::debug!("Updated volunteer {}", id);

        Ok(Volunteer {
            id,
            name: volunteer.name.clone(),
            email: volunteer.email.clone(),
            skills: volunteer.skills.clone(),
        })
    }

    pub async fn delete_volunteer(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM volunteer WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("volunteer {}", id)));
        }

        tracing::debug!("Deleted volunteer {}", id);

        Ok(())
    }

    /// All roles in insertion order
    pub async fn list_roles(&self) -> Result<Vec<Role>, StoreError> {
        let roles = sqlx::query_as::<_, Role>("SELECT id, name, required_skills FROM role ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(roles)
    }

    pub async fn count_roles(&self) -> Result<usize, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM role")
            .fetch_one(&self.pool)
            .await?;

        Ok(count as usize)
    }

    /// Insert the fixed sample roles in one transaction
    ///
    /// There is no uniqueness guard: seeding twice stores every role twice.
    pub async fn seed_roles(&self) -> Result<Vec<Role>, StoreError> {
        let mut tx = self.pool.begin().await?;
        let mut roles = Vec::with_capacity(SEED_ROLES.len());

        for (name, required_skills) in SEED_ROLES {
            let result = sqlx::query("INSERT INTO role (name, required_skills) VALUES (?, ?)")
                .bind(name)
                .bind(required_skills)
                .execute(&mut *tx)
                .await?;

            roles.push(Role {
                id: result.last_insert_rowid(),
                name: name.to_string(),
                required_skills: required_skills.to_string(),
            });
        }

        tx.commit().await?;

        tracing::info!("Seeded {} roles", roles.len());

        Ok(roles)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
