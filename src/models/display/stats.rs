//! Statistics display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::StatsBucket;
use crate::output::formatters::format_price;

/// Statistics bucket display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct StatsDisplay {
    /// Bucket label (day/month/year)
    #[tabled(rename = "PERIOD")]
    pub period: String,

    /// Accepted transactions
    #[tabled(rename = "TRANSACTIONS")]
    pub transactions: u64,

    /// Tickets sold
    #[tabled(rename = "TICKETS")]
    pub tickets: u64,

    /// Revenue
    #[tabled(rename = "REVENUE")]
    pub revenue: String,
}

impl From<StatsBucket> for StatsDisplay {
    fn from(bucket: StatsBucket) -> Self {
        Self {
            period: bucket.label,
            transactions: bucket.transaction_count,
            tickets: bucket.tickets_sold,
            revenue: format_price(bucket.revenue),
        }
    }
}
