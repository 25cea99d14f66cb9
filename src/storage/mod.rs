//! Storage module
//!
//! The data-access adapter boundary over the relational store.

pub mod postgres;
pub mod store;

pub use postgres::PgStudyStore;
pub use store::StudyStore;
