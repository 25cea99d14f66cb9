//! Data-access adapter trait
//!
//! Pure I/O boundary: row-level reads and writes, no business logic.
//! Failures surface as errors, never as silent defaults. Services take an
//! injected `Arc<dyn StudyStore>`, which keeps test doubles trivial and
//! rules out any process-wide connection singleton.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{
    CompletionRecord, Course, CourseModule, LeaderboardViewRow, Profile, ProfileName, UserPoints,
};

/// Row-level access to the study-tracking store
#[async_trait]
pub trait StudyStore: Send + Sync {
    /// All courses with `is_active = true`
    async fn list_active_courses(&self) -> Result<Vec<Course>>;

    /// All modules with `is_active = true`
    async fn list_active_modules(&self) -> Result<Vec<CourseModule>>;

    /// Every completion record belonging to one user
    async fn list_completions_for_user(&self, user_id: &str) -> Result<Vec<CompletionRecord>>;

    /// `(user_id, points)` projection over all completion records
    async fn list_completion_points(&self) -> Result<Vec<UserPoints>>;

    /// `(id, display_name)` projection over all profiles
    async fn list_profile_names(&self) -> Result<Vec<ProfileName>>;

    /// Read the precomputed leaderboard aggregate, trusting its ordering.
    /// Erroring here is routine when the view has not been provisioned.
    async fn fetch_leaderboard_view(&self, limit: i64) -> Result<Vec<LeaderboardViewRow>>;

    /// Exact-match profile lookup by username
    async fn find_profile_by_username(&self, username: &str) -> Result<Option<Profile>>;

    /// Exact-match profile lookup by id
    async fn find_profile_by_id(&self, id: &str) -> Result<Option<Profile>>;

    /// Delete all completion records for one user
    async fn delete_completions_for_user(&self, user_id: &str) -> Result<()>;

    /// Delete one profile row
    async fn delete_profile(&self, user_id: &str) -> Result<()>;
}
