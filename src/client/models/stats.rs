//! Organizer statistics models

use serde::{Deserialize, Serialize};

/// Grouping granularity for sales statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsGranularity {
    Day,
    Month,
    Year,
}

impl StatsGranularity {
    /// Wire value used in the `groupBy` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatsGranularity::Day => "day",
            StatsGranularity::Month => "month",
            StatsGranularity::Year => "year",
        }
    }
}

/// One aggregated bucket from `GET /organizer/stats`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsBucket {
    /// Bucket label (e.g. "2026-05" for month granularity)
    pub label: String,

    /// Accepted transactions in the bucket
    pub transaction_count: u64,

    /// Tickets sold in the bucket
    pub tickets_sold: u64,

    /// Revenue in the bucket
    pub revenue: u64,
}

/// Query parameters for the statistics endpoint
#[derive(Debug, Clone)]
pub struct StatsParams {
    /// Grouping granularity
    pub group_by: StatsGranularity,

    /// Inclusive range start, `YYYY-MM-DD` (optional)
    pub from: Option<String>,

    /// Inclusive range end, `YYYY-MM-DD` (optional)
    pub to: Option<String>,
}

impl StatsParams {
    /// Convert to query string parameters.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("groupBy", self.group_by.as_str().to_string())];
        if let Some(ref from) = self.from {
            params.push(("from", from.clone()));
        }
        if let Some(ref to) = self.to {
            params.push(("to", to.clone()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_params_query() {
        let params = StatsParams {
            group_by: StatsGranularity::Month,
            from: Some("2026-01-01".to_string()),
            to: None,
        };

        let query = params.to_query_params();
        assert_eq!(
            query,
            vec![
                ("groupBy", "month".to_string()),
                ("from", "2026-01-01".to_string()),
            ]
        );
    }
}
