//! Filter argument types for CLI commands

use clap::Args;

use super::common::{SortDir, SortField};
use crate::client::models::EventFilters;

/// Upcoming/past filter for event listings, judged against each event's
/// end time at the current wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EventWhen {
    /// Events that have not ended yet
    Upcoming,
    /// Events whose end time has passed
    Past,
}

/// Event listing filters.
///
/// `q`, `category`, and `location` are sent to the server; `when`, `sort`,
/// and `dir` are applied client-side to the fetched page.
#[derive(Debug, Clone, Args, Default)]
pub struct EventFilterArgs {
    /// Free-text search over name and description
    #[arg(long, short = 'q')]
    pub q: Option<String>,

    /// Filter by category
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Filter by location
    #[arg(long, short = 'l')]
    pub location: Option<String>,

    /// Keep only upcoming or past events
    #[arg(long, value_enum)]
    pub when: Option<EventWhen>,

    /// Sort the fetched list
    #[arg(long, value_enum)]
    pub sort: Option<SortField>,

    /// Sort direction (asc, desc)
    #[arg(long, value_enum, requires = "sort")]
    pub dir: Option<SortDir>,
}

impl EventFilterArgs {
    /// Extract the server-side filters.
    pub fn to_filters(&self) -> EventFilters {
        EventFilters {
            q: self.q.clone(),
            category: self.category.clone(),
            location: self.location.clone(),
        }
    }
}
