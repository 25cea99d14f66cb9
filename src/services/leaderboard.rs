//! Leaderboard aggregation
//!
//! Two tiers, tried in order, first success wins: the storage layer's
//! precomputed aggregate view, then an on-the-fly derivation from raw
//! completion records. The source is a tagged result so each tier can be
//! exercised independently.

use async_trait::async_trait;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::error::Result;
use crate::models::{LeaderboardEntry, ProfileName, UserPoints};
use crate::storage::StudyStore;

/// Maximum entries returned by either tier
pub const LEADERBOARD_LIMIT: usize = 200;

/// Which tier produced the ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaderboardSource {
    /// Served straight from the precomputed aggregate view
    ViewAggregate(Vec<LeaderboardEntry>),
    /// Derived on the fly from raw completion records
    Fallback(Vec<LeaderboardEntry>),
}

impl LeaderboardSource {
    pub fn into_entries(self) -> Vec<LeaderboardEntry> {
        match self {
            LeaderboardSource::ViewAggregate(entries) => entries,
            LeaderboardSource::Fallback(entries) => entries,
        }
    }
}

/// Leaderboard service trait
#[async_trait]
pub trait LeaderboardService: Send + Sync {
    /// Resolve the current ranking, tagged with the tier that produced it
    async fn resolve(&self) -> Result<LeaderboardSource>;
}

/// Leaderboard service implementation
pub struct LeaderboardServiceImpl {
    store: Arc<dyn StudyStore>,
}

impl LeaderboardServiceImpl {
    pub fn new(store: Arc<dyn StudyStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LeaderboardService for LeaderboardServiceImpl {
    async fn resolve(&self) -> Result<LeaderboardSource> {
        // Tier 1: trust the view's own aggregation and ordering. An empty
        // result set is still a success and does not trigger the fallback.
        match self
            .store
            .fetch_leaderboard_view(LEADERBOARD_LIMIT as i64)
            .await
        {
            Ok(rows) => Ok(LeaderboardSource::ViewAggregate(
                rows.into_iter().map(LeaderboardEntry::from).collect(),
            )),
            Err(err) => {
                // Routine when the view has not been provisioned.
                debug!("leaderboard view unavailable, deriving from raw records: {err}");

                // Tier 2: two independent reads; either failing fails the
                // whole computation, no partial leaderboard.
                let (points, names) = tokio::try_join!(
                    self.store.list_completion_points(),
                    self.store.list_profile_names()
                )?;

                Ok(LeaderboardSource::Fallback(derive_leaderboard(
                    points, names,
                )))
            }
        }
    }
}

/// Create a leaderboard service instance
pub fn create_leaderboard_service(store: Arc<dyn StudyStore>) -> Box<dyn LeaderboardService> {
    Box::new(LeaderboardServiceImpl::new(store))
}

/// Derive the ranking from raw rows: sum points per user in first-encounter
/// order, join display names, stable sort by points descending, truncate.
fn derive_leaderboard(points: Vec<UserPoints>, names: Vec<ProfileName>) -> Vec<LeaderboardEntry> {
    let name_by_id: HashMap<String, String> = names
        .into_iter()
        .map(|p| (p.id, p.name.unwrap_or_default()))
        .collect();

    // Users with no completion records never enter the accumulator and are
    // therefore omitted from the ranking.
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, i64> = HashMap::new();
    for record in points {
        let awarded = record.points.unwrap_or(0);
        match totals.entry(record.user_id) {
            Entry::Occupied(mut slot) => *slot.get_mut() += awarded,
            Entry::Vacant(slot) => {
                order.push(slot.key().clone());
                slot.insert(awarded);
            }
        }
    }

    let mut entries: Vec<LeaderboardEntry> = order
        .into_iter()
        .map(|user_id| {
            let name = name_by_id.get(&user_id).cloned().unwrap_or_default();
            let points = totals[&user_id];
            LeaderboardEntry {
                user_id,
                name,
                points,
                weeks: None,
            }
        })
        .collect();

    // Stable sort: ties keep encounter order, no secondary key.
    entries.sort_by(|a, b| b.points.cmp(&a.points));
    entries.truncate(LEADERBOARD_LIMIT);
    entries
}
