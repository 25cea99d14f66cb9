//! Public profile composition
//!
//! Combines the course progress aggregation with profile metadata for
//! unauthenticated profile lookups.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::error::{AppError, Result};
use crate::models::{CourseProgressSummary, Profile};
use crate::services::progress::compute_course_progress;
use crate::storage::StudyStore;

/// Composed public profile view
#[derive(Debug, Clone)]
pub struct PublicProfile {
    pub profile: Profile,
    /// Sum of points across all of the user's completion records, including
    /// those tied to since-deactivated modules or courses
    pub total_points: i64,
    pub courses: Vec<CourseProgressSummary>,
}

/// Public profile service trait
#[async_trait]
pub trait PublicProfileService: Send + Sync {
    /// Resolve an identifier and compose the public view
    async fn compose(&self, identifier: &str) -> Result<PublicProfile>;
}

/// Public profile service implementation
pub struct PublicProfileServiceImpl {
    store: Arc<dyn StudyStore>,
}

impl PublicProfileServiceImpl {
    pub fn new(store: Arc<dyn StudyStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PublicProfileService for PublicProfileServiceImpl {
    async fn compose(&self, identifier: &str) -> Result<PublicProfile> {
        // Username match first; the id lookup only runs when that yields
        // nothing, since username hits are the common case.
        let profile = match self.store.find_profile_by_username(identifier).await? {
            Some(profile) => profile,
            None => self
                .store
                .find_profile_by_id(identifier)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("profile not found: {identifier}")))?,
        };

        debug!("composing public profile for user {}", profile.id);

        // Catalog reads are mutually independent; the completions read is
        // sequenced after the profile resolution above.
        let (courses, modules) = tokio::try_join!(
            self.store.list_active_courses(),
            self.store.list_active_modules()
        )?;
        let completions = self.store.list_completions_for_user(&profile.id).await?;

        let total_points = completions.iter().map(|c| c.awarded_points()).sum();
        let summaries = compute_course_progress(&courses, &modules, &completions);

        Ok(PublicProfile {
            profile,
            total_points,
            courses: summaries,
        })
    }
}

/// Create a public profile service instance
pub fn create_public_profile_service(store: Arc<dyn StudyStore>) -> Box<dyn PublicProfileService> {
    Box::new(PublicProfileServiceImpl::new(store))
}
