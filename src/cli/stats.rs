//! Organizer statistics command

use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::cli::handlers::print_list;
use crate::client::OrganizerApi;
use crate::client::models::{StatsBucket, StatsGranularity, StatsParams};
use crate::error::Result;
use crate::models::StatsDisplay;

/// Run the stats command.
///
/// Aggregation happens server-side; each invocation re-queries with the
/// chosen granularity and date range.
pub async fn run(
    opts: &GlobalOptions,
    group_by: StatsGranularity,
    from: Option<String>,
    to: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::authenticated(opts).await?;
    ctx.require_organizer()?;

    let params = StatsParams { group_by, from, to };
    debug!("Fetching stats grouped by {}", params.group_by.as_str());

    let buckets = ctx.client().stats(ctx.token()?, &params).await?;

    print_list::<StatsBucket, StatsDisplay>(buckets, ctx.format)
}
