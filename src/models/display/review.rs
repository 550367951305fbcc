//! Review display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{EMPTY_CELL, truncate_string};
use crate::client::models::Review;
use crate::output::formatters::format_datetime;

/// Review display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ReviewDisplay {
    /// Star rating rendered as stars
    #[tabled(rename = "RATING")]
    pub rating: String,

    /// Reviewer name
    #[tabled(rename = "BY")]
    pub by: String,

    /// Comment excerpt
    #[tabled(rename = "COMMENT")]
    pub comment: String,

    /// Submission date
    #[tabled(rename = "DATE")]
    pub date: String,
}

impl From<Review> for ReviewDisplay {
    fn from(review: Review) -> Self {
        Self {
            rating: "★".repeat(review.rating.min(5) as usize),
            by: review.user_name,
            comment: review
                .comment
                .map(|c| truncate_string(&c, 60))
                .unwrap_or_else(|| EMPTY_CELL.to_string()),
            date: format_datetime(review.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_renders_as_stars() {
        let review = Review {
            id: 1,
            user_name: "Ada".to_string(),
            rating: 4,
            comment: None,
            created_at: "2026-05-02T08:00:00Z".parse().unwrap(),
        };

        let display = ReviewDisplay::from(review);
        assert_eq!(display.rating, "★★★★");
        assert_eq!(display.comment, EMPTY_CELL);
    }
}
