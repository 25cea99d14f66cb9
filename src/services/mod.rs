//! Services module

pub mod account;
pub mod leaderboard;
pub mod progress;
pub mod public_profile;

pub use account::{create_account_service, AccountService, DeletionStep};
pub use leaderboard::{
    create_leaderboard_service, LeaderboardService, LeaderboardSource, LEADERBOARD_LIMIT,
};
pub use progress::compute_course_progress;
pub use public_profile::{create_public_profile_service, PublicProfile, PublicProfileService};
