//! Public profile DTOs

use serde::Serialize;

use crate::models::CourseProgressSummary;
use crate::services::public_profile::PublicProfile;

/// Response for `GET /api/profiles/:identifier`
#[derive(Debug, Serialize)]
pub struct PublicProfileResponse {
    pub ok: bool,
    pub profile: ProfileView,
    pub totals: TotalsView,
    pub courses: Vec<CourseProgressSummary>,
}

/// Public subset of the profile; email and admin flag never leave the
/// service
#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
}

/// Aggregate totals for the profile view
#[derive(Debug, Serialize)]
pub struct TotalsView {
    pub total_points: i64,
}

impl From<PublicProfile> for PublicProfileResponse {
    fn from(composed: PublicProfile) -> Self {
        let name = composed.profile.resolved_name().map(str::to_string);
        Self {
            ok: true,
            profile: ProfileView {
                id: composed.profile.id,
                username: composed.profile.username,
                name,
                avatar_url: composed.profile.avatar_url,
                bio: composed.profile.bio,
            },
            totals: TotalsView {
                total_points: composed.total_points,
            },
            courses: composed.courses,
        }
    }
}
