//! Domain models

pub mod completion;
pub mod course;
pub mod leaderboard;
pub mod profile;
pub mod progress;

pub use completion::CompletionRecord;
pub use course::{Course, CourseModule};
pub use leaderboard::{LeaderboardEntry, LeaderboardViewRow, ProfileName, UserPoints};
pub use profile::Profile;
pub use progress::CourseProgressSummary;
