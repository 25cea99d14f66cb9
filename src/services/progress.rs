//! Course progress aggregation
//!
//! Pure computation over per-request snapshots: no I/O, no caching, no
//! side effects. Callers fetch the rows, this module does the math.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::{CompletionRecord, Course, CourseModule, CourseProgressSummary};

/// Compute per-course completion summaries.
///
/// Inactive courses and inactive modules are excluded before counting. A
/// module whose `course_id` references no active course is silently dropped;
/// it never invents a course in the output. Output preserves the input
/// course order.
pub fn compute_course_progress(
    courses: &[Course],
    modules: &[CourseModule],
    completions: &[CompletionRecord],
) -> Vec<CourseProgressSummary> {
    let mut modules_by_course: HashMap<&str, Vec<&CourseModule>> = HashMap::new();
    for module in modules.iter().filter(|m| m.is_active) {
        modules_by_course
            .entry(module.course_id.as_str())
            .or_default()
            .push(module);
    }

    let completed_at_by_module: HashMap<&str, Option<DateTime<Utc>>> = completions
        .iter()
        .filter(|c| c.completed)
        .map(|c| (c.module_id.as_str(), c.completed_at))
        .collect();

    courses
        .iter()
        .filter(|course| course.is_active)
        .map(|course| {
            let course_modules = modules_by_course
                .get(course.id.as_str())
                .map(Vec::as_slice)
                .unwrap_or(&[]);

            let total = course_modules.len() as u32;
            let mut completed = 0u32;
            let mut last_completed_at: Option<DateTime<Utc>> = None;

            for module in course_modules {
                if let Some(completed_at) = completed_at_by_module.get(module.id.as_str()) {
                    completed += 1;
                    if let Some(ts) = completed_at {
                        // Max by timestamp value, not insertion order.
                        if last_completed_at.map_or(true, |current| *ts > current) {
                            last_completed_at = Some(*ts);
                        }
                    }
                }
            }

            CourseProgressSummary {
                course_id: course.id.clone(),
                title: course.title.clone(),
                description: course.description.clone(),
                total_modules: total,
                completed_modules: completed,
                percent: percentage(completed, total),
                last_completed_at,
            }
        })
        .collect()
}

/// Whole-number completion percentage, rounded half-up; 0 for an empty
/// course rather than a division by zero.
fn percentage(completed: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(completed) / f64::from(total) * 100.0).round() as u32
}
