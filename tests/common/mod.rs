//! Shared test fixtures: an in-memory store double and a recording
//! identity provider.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};

use studyquest::error::{AppError, Result};
use studyquest::models::{
    CompletionRecord, Course, CourseModule, LeaderboardViewRow, Profile, ProfileName, UserPoints,
};
use studyquest::security::auth::Claims;
use studyquest::security::identity::IdentityProvider;
use studyquest::services::account::DeletionStep;
use studyquest::storage::StudyStore;

pub const TEST_SECRET: &str = "integration-test-secret";

/// In-memory store double. `view_rows: None` makes the view tier error,
/// which is how the fallback tier gets exercised.
#[derive(Default)]
pub struct InMemoryStore {
    pub courses: Vec<Course>,
    pub modules: Vec<CourseModule>,
    pub completions: Vec<CompletionRecord>,
    pub profiles: Vec<Profile>,
    pub view_rows: Option<Vec<LeaderboardViewRow>>,
    pub fail_points_read: bool,
    pub fail_names_read: bool,
    pub fail_delete_at: Option<DeletionStep>,
    /// Executed deletion steps, in order; share the handle with a
    /// `RecordingIdentity` to observe the full sequence
    pub deleted_steps: Arc<Mutex<Vec<DeletionStep>>>,
}

#[async_trait]
impl StudyStore for InMemoryStore {
    async fn list_active_courses(&self) -> Result<Vec<Course>> {
        Ok(self.courses.iter().filter(|c| c.is_active).cloned().collect())
    }

    async fn list_active_modules(&self) -> Result<Vec<CourseModule>> {
        Ok(self.modules.iter().filter(|m| m.is_active).cloned().collect())
    }

    async fn list_completions_for_user(&self, user_id: &str) -> Result<Vec<CompletionRecord>> {
        Ok(self
            .completions
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_completion_points(&self) -> Result<Vec<UserPoints>> {
        if self.fail_points_read {
            return Err(AppError::UpstreamRead("points read failed".to_string()));
        }
        Ok(self
            .completions
            .iter()
            .map(|c| UserPoints {
                user_id: c.user_id.clone(),
                points: c.points,
            })
            .collect())
    }

    async fn list_profile_names(&self) -> Result<Vec<ProfileName>> {
        if self.fail_names_read {
            return Err(AppError::UpstreamRead("names read failed".to_string()));
        }
        Ok(self
            .profiles
            .iter()
            .map(|p| ProfileName {
                id: p.id.clone(),
                name: p.display_name.clone(),
            })
            .collect())
    }

    async fn fetch_leaderboard_view(&self, limit: i64) -> Result<Vec<LeaderboardViewRow>> {
        match &self.view_rows {
            Some(rows) => Ok(rows.iter().take(limit as usize).cloned().collect()),
            None => Err(AppError::UpstreamRead(
                "relation \"leaderboard_totals\" does not exist".to_string(),
            )),
        }
    }

    async fn find_profile_by_username(&self, username: &str) -> Result<Option<Profile>> {
        Ok(self
            .profiles
            .iter()
            .find(|p| p.username == username)
            .cloned())
    }

    async fn find_profile_by_id(&self, id: &str) -> Result<Option<Profile>> {
        Ok(self.profiles.iter().find(|p| p.id == id).cloned())
    }

    async fn delete_completions_for_user(&self, _user_id: &str) -> Result<()> {
        if self.fail_delete_at == Some(DeletionStep::Completions) {
            return Err(AppError::UpstreamWrite {
                step: DeletionStep::Completions,
                message: "delete failed".to_string(),
            });
        }
        self.deleted_steps
            .lock()
            .unwrap()
            .push(DeletionStep::Completions);
        Ok(())
    }

    async fn delete_profile(&self, _user_id: &str) -> Result<()> {
        if self.fail_delete_at == Some(DeletionStep::Profile) {
            return Err(AppError::UpstreamWrite {
                step: DeletionStep::Profile,
                message: "delete failed".to_string(),
            });
        }
        self.deleted_steps
            .lock()
            .unwrap()
            .push(DeletionStep::Profile);
        Ok(())
    }
}

/// Identity provider double recording into the same step log as the store
pub struct RecordingIdentity {
    pub fail: bool,
    pub deleted_steps: Arc<Mutex<Vec<DeletionStep>>>,
}

#[async_trait]
impl IdentityProvider for RecordingIdentity {
    async fn delete_user(&self, _user_id: &str) -> Result<()> {
        if self.fail {
            return Err(AppError::UpstreamWrite {
                step: DeletionStep::Identity,
                message: "identity service returned 502".to_string(),
            });
        }
        self.deleted_steps
            .lock()
            .unwrap()
            .push(DeletionStep::Identity);
        Ok(())
    }
}

pub fn course(id: &str, title: &str, active: bool) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        is_active: active,
    }
}

pub fn module(id: &str, course_id: &str, active: bool) -> CourseModule {
    CourseModule {
        id: id.to_string(),
        course_id: course_id.to_string(),
        title: format!("Module {id}"),
        is_active: active,
        sort_order: 0,
    }
}

pub fn completion(user_id: &str, module_id: &str, points: Option<i64>, day: u32) -> CompletionRecord {
    CompletionRecord {
        user_id: user_id.to_string(),
        module_id: module_id.to_string(),
        completed: true,
        completed_at: Some(Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap()),
        points,
    }
}

pub fn profile(id: &str, username: &str) -> Profile {
    Profile {
        id: id.to_string(),
        username: username.to_string(),
        display_name: None,
        full_name: None,
        email: None,
        avatar_url: None,
        bio: None,
        is_admin: false,
    }
}

/// Mint an HS256 token signed with the integration test secret
pub fn mint_token(sub: &str, purpose: Option<&str>, exp_offset: i64) -> String {
    let claims = Claims {
        sub: sub.to_string(),
        exp: (Utc::now().timestamp() + exp_offset) as usize,
        purpose: purpose.map(str::to_string),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}
