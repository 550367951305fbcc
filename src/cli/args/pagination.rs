//! Pagination argument types for CLI commands

use clap::Args;

use crate::client::PageParams;

/// Shared pagination arguments for list commands.
///
/// Flatten this into any command that supports pagination:
/// ```ignore
/// List {
///     #[command(flatten)]
///     pagination: PaginationArgs,
/// }
/// ```
#[derive(Args, Debug, Default, Clone)]
pub struct PaginationArgs {
    /// Page number (1-indexed)
    #[arg(long, short = 'p')]
    pub page: Option<usize>,

    /// Results per page
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Fetch every page, not just the first
    #[arg(long, conflicts_with = "page")]
    pub all: bool,
}

impl PaginationArgs {
    /// Convert CLI args to API pagination params.
    pub fn to_params(&self) -> PageParams {
        let mut params = PageParams::new();

        if let Some(page) = self.page {
            params = params.page(page);
        }
        if let Some(limit) = self.limit {
            params = params.limit(limit);
        }

        params
    }
}
