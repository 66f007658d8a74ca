//! Statistics report

use crate::game::{Stats, format_win_percentage};
use crate::services::{StatsStore, StoreError};

/// Persisted statistics with derived figures
pub struct StatsReport {
    pub stats: Stats,
    pub win_percentage: String,
}

impl StatsReport {
    #[must_use]
    pub fn new(stats: Stats) -> Self {
        Self {
            win_percentage: format_win_percentage(stats.win_percentage()),
            stats,
        }
    }
}

/// Load the statistics report from `store`
///
/// # Errors
///
/// Returns an error if the stored record exists but cannot be read.
pub fn load_stats_report<S: StatsStore + ?Sized>(store: &S) -> Result<StatsReport, StoreError> {
    Ok(StatsReport::new(store.load_stats()?.unwrap_or_default()))
}
