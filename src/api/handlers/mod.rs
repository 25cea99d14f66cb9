//! API handlers

pub mod account_handler;
pub mod leaderboard_handler;
pub mod profile_handler;
