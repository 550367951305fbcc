//! Voucher models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Organizer-issued, event-scoped discount code
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    /// Voucher ID
    pub id: u64,

    /// Redeemable code
    pub code: String,

    /// Flat discount per transaction
    pub discount_amount: u64,

    /// Start of the validity window
    pub starts_at: DateTime<Utc>,

    /// End of the validity window
    pub ends_at: DateTime<Utc>,

    /// Usage cap; `None` means unlimited
    #[serde(default)]
    pub max_uses: Option<u32>,

    /// Redemptions so far
    #[serde(default)]
    pub used_count: u32,
}

/// Create/update payload for voucher management
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherPayload {
    /// Redeemable code
    pub code: String,

    /// Flat discount per transaction
    pub discount_amount: u64,

    /// Start of the validity window
    pub starts_at: DateTime<Utc>,

    /// End of the validity window
    pub ends_at: DateTime<Utc>,

    /// Usage cap; omitted means unlimited
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<u32>,
}
