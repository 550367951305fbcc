//! Review commands

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::client::CatalogApi;
use crate::client::models::CreateReviewRequest;
use crate::error::{Error, Result};

/// Run the review add command.
///
/// Eligibility (the reviewer attended and the event finished) is enforced
/// server-side; only the rating range is checked here.
pub async fn add(
    opts: &GlobalOptions,
    event_id: u64,
    rating: u8,
    comment: Option<String>,
) -> Result<()> {
    if !(1..=5).contains(&rating) {
        return Err(Error::Validation(
            "Rating must be between 1 and 5.".to_string(),
        ));
    }

    let ctx = CommandContext::authenticated(opts).await?;

    let review = ctx
        .client()
        .create_review(ctx.token()?, event_id, &CreateReviewRequest { rating, comment })
        .await?;

    println!(
        "{} Review submitted ({}).",
        "✓".green(),
        "★".repeat(review.rating as usize)
    );
    Ok(())
}
