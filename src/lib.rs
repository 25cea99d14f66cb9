//! StudyQuest - gamified study-tracking backend
//!
//! The computational core is the progress aggregation and ranking engine:
//! per-course completion summaries for public profiles and a global points
//! leaderboard served from a precomputed aggregate view with an on-the-fly
//! fallback when the view is unavailable.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod security;
pub mod services;
pub mod storage;
