//! Review models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Customer review attached to an event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Review ID
    pub id: u64,

    /// Reviewer display name
    pub user_name: String,

    /// Star rating, 1 to 5
    pub rating: u8,

    /// Free-text comment (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Submission time
    pub created_at: DateTime<Utc>,
}

/// Review submission for `POST /events/{id}/reviews`.
///
/// Eligibility (attended, event finished) is enforced server-side.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    /// Star rating, 1 to 5
    pub rating: u8,

    /// Free-text comment (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}
