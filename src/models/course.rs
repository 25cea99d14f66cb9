//! Course catalog models

use serde::{Deserialize, Serialize};

/// A course; only active courses participate in aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub is_active: bool,
}

/// A study module, the smallest unit of content. Belongs to exactly one
/// course; only active modules count toward totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseModule {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub is_active: bool,
    pub sort_order: i32,
}
