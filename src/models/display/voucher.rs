//! Voucher display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Voucher;
use crate::output::formatters::{format_datetime, format_price};

/// Voucher display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct VoucherDisplay {
    /// Voucher ID
    #[tabled(rename = "ID")]
    pub id: u64,

    /// Redeemable code
    #[tabled(rename = "CODE")]
    pub code: String,

    /// Discount per transaction
    #[tabled(rename = "DISCOUNT")]
    pub discount: String,

    /// Validity window start
    #[tabled(rename = "STARTS")]
    pub starts: String,

    /// Validity window end
    #[tabled(rename = "ENDS")]
    pub ends: String,

    /// Redemptions over the cap, `used/∞` when uncapped
    #[tabled(rename = "USES")]
    pub uses: String,
}

impl From<Voucher> for VoucherDisplay {
    fn from(voucher: Voucher) -> Self {
        let uses = match voucher.max_uses {
            Some(max) => format!("{}/{}", voucher.used_count, max),
            None => format!("{}/∞", voucher.used_count),
        };

        Self {
            id: voucher.id,
            code: voucher.code,
            discount: format_price(voucher.discount_amount),
            starts: format_datetime(voucher.starts_at),
            ends: format_datetime(voucher.ends_at),
            uses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncapped_voucher_shows_infinity() {
        let voucher = Voucher {
            id: 3,
            code: "EARLYBIRD".to_string(),
            discount_amount: 50_000,
            starts_at: "2026-01-01T00:00:00Z".parse().unwrap(),
            ends_at: "2026-02-01T00:00:00Z".parse().unwrap(),
            max_uses: None,
            used_count: 7,
        };

        let display = VoucherDisplay::from(voucher);
        assert_eq!(display.uses, "7/∞");
        assert_eq!(display.discount, "50,000");
    }

    #[test]
    fn test_capped_voucher_shows_cap() {
        let voucher = Voucher {
            id: 3,
            code: "VIP".to_string(),
            discount_amount: 10_000,
            starts_at: "2026-01-01T00:00:00Z".parse().unwrap(),
            ends_at: "2026-02-01T00:00:00Z".parse().unwrap(),
            max_uses: Some(100),
            used_count: 7,
        };

        let display = VoucherDisplay::from(voucher);
        assert_eq!(display.uses, "7/100");
    }
}
