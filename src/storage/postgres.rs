//! Postgres implementation of the data-access adapter
//!
//! One runtime-bound query per operation. Schema lives in `migrations/`:
//! `profiles`, `courses`, `modules`, `module_completions` (with a unique
//! index on `(user_id, module_id)` — duplicate completion guarding belongs
//! here, not in the aggregators) and the `leaderboard_totals` view, which
//! carries its own ordering.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;

use crate::config::DatabaseConfig;
use crate::error::{AppError, Result};
use crate::models::{
    CompletionRecord, Course, CourseModule, LeaderboardViewRow, Profile, ProfileName, UserPoints,
};
use crate::services::account::DeletionStep;
use crate::storage::store::StudyStore;

/// Postgres-backed store
#[derive(Clone)]
pub struct PgStudyStore {
    pool: PgPool,
}

impl PgStudyStore {
    /// Wrap an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool from configuration. The acquire timeout bounds every
    /// read issued through this adapter.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.connections)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .connect(&config.url)
            .await
            .map_err(|e| AppError::Config(format!("database connection failed: {e}")))?;

        Ok(Self { pool })
    }

    /// Apply pending migrations
    pub async fn init(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::Config(format!("migration failed: {e}")))?;
        Ok(())
    }
}

fn read_err(e: sqlx::Error) -> AppError {
    AppError::UpstreamRead(e.to_string())
}

fn profile_from_row(row: &sqlx::postgres::PgRow) -> Profile {
    Profile {
        id: row.get("id"),
        username: row.get("username"),
        display_name: row.get("display_name"),
        full_name: row.get("full_name"),
        email: row.get("email"),
        avatar_url: row.get("avatar_url"),
        bio: row.get("bio"),
        is_admin: row.get("is_admin"),
    }
}

#[async_trait]
impl StudyStore for PgStudyStore {
    async fn list_active_courses(&self) -> Result<Vec<Course>> {
        let rows = sqlx::query(
            "SELECT id, title, description, is_active FROM courses WHERE is_active = TRUE",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(read_err)?;

        Ok(rows
            .iter()
            .map(|row| Course {
                id: row.get("id"),
                title: row.get("title"),
                description: row.get("description"),
                is_active: row.get("is_active"),
            })
            .collect())
    }

    async fn list_active_modules(&self) -> Result<Vec<CourseModule>> {
        let rows = sqlx::query(
            "SELECT id, course_id, title, is_active, sort_order \
             FROM modules WHERE is_active = TRUE",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(read_err)?;

        Ok(rows
            .iter()
            .map(|row| CourseModule {
                id: row.get("id"),
                course_id: row.get("course_id"),
                title: row.get("title"),
                is_active: row.get("is_active"),
                sort_order: row.get("sort_order"),
            })
            .collect())
    }

    async fn list_completions_for_user(&self, user_id: &str) -> Result<Vec<CompletionRecord>> {
        let rows = sqlx::query(
            "SELECT user_id, module_id, completed, completed_at, points \
             FROM module_completions WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(read_err)?;

        Ok(rows
            .iter()
            .map(|row| CompletionRecord {
                user_id: row.get("user_id"),
                module_id: row.get("module_id"),
                completed: row.get("completed"),
                completed_at: row.get("completed_at"),
                points: row.get("points"),
            })
            .collect())
    }

    async fn list_completion_points(&self) -> Result<Vec<UserPoints>> {
        let rows = sqlx::query("SELECT user_id, points FROM module_completions")
            .fetch_all(&self.pool)
            .await
            .map_err(read_err)?;

        Ok(rows
            .iter()
            .map(|row| UserPoints {
                user_id: row.get("user_id"),
                points: row.get("points"),
            })
            .collect())
    }

    async fn list_profile_names(&self) -> Result<Vec<ProfileName>> {
        let rows = sqlx::query("SELECT id, display_name FROM profiles")
            .fetch_all(&self.pool)
            .await
            .map_err(read_err)?;

        Ok(rows
            .iter()
            .map(|row| ProfileName {
                id: row.get("id"),
                name: row.get("display_name"),
            })
            .collect())
    }

    async fn fetch_leaderboard_view(&self, limit: i64) -> Result<Vec<LeaderboardViewRow>> {
        // No ORDER BY: the view carries its own ordering.
        let rows = sqlx::query(
            "SELECT user_id, name, total_points, weeks_count \
             FROM leaderboard_totals LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(read_err)?;

        Ok(rows
            .iter()
            .map(|row| LeaderboardViewRow {
                user_id: row.get("user_id"),
                name: row.get("name"),
                total_points: row.get("total_points"),
                weeks_count: row.get("weeks_count"),
            })
            .collect())
    }

    async fn find_profile_by_username(&self, username: &str) -> Result<Option<Profile>> {
        let row = sqlx::query(
            "SELECT id, username, display_name, full_name, email, avatar_url, bio, is_admin \
             FROM profiles WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(read_err)?;

        Ok(row.as_ref().map(profile_from_row))
    }

    async fn find_profile_by_id(&self, id: &str) -> Result<Option<Profile>> {
        let row = sqlx::query(
            "SELECT id, username, display_name, full_name, email, avatar_url, bio, is_admin \
             FROM profiles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(read_err)?;

        Ok(row.as_ref().map(profile_from_row))
    }

    async fn delete_completions_for_user(&self, user_id: &str) -> Result<()> {
        sqlx::query("DELETE FROM module_completions WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::UpstreamWrite {
                step: DeletionStep::Completions,
                message: e.to_string(),
            })?;
        Ok(())
    }

    async fn delete_profile(&self, user_id: &str) -> Result<()> {
        sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::UpstreamWrite {
                step: DeletionStep::Profile,
                message: e.to_string(),
            })?;
        Ok(())
    }
}
