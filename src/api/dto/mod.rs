//! API DTOs
//!
//! Response shapes for the public endpoints.

pub mod account_dto;
pub mod leaderboard_dto;
pub mod profile_dto;
