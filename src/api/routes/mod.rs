//! API routes

pub mod account_routes;
pub mod leaderboard_routes;
pub mod profile_routes;
