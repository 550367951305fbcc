//! Checkout command

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::client::models::CreateTransactionRequest;
use crate::client::{CatalogApi, OrderApi};
use crate::error::{Error, Result};
use crate::output::formatters::{format_datetime, format_price};

/// Run the checkout command.
///
/// The displayed remaining-seat count is checked before anything is
/// submitted; a quantity the event cannot seat never produces a request.
/// The server remains the final authority on seats, discounts, and price.
pub async fn run(
    opts: &GlobalOptions,
    event_id: u64,
    qty: u32,
    voucher: Option<String>,
    coupon: Option<String>,
    points: Option<u64>,
) -> Result<()> {
    let ctx = CommandContext::authenticated(opts).await?;

    let event = ctx.client().get_event(event_id).await?;
    validate_quantity(qty, event.remaining_seats)?;

    let txn = ctx
        .client()
        .create_transaction(
            ctx.token()?,
            &CreateTransactionRequest {
                event_id,
                quantity: qty,
                voucher_code: voucher,
                coupon_code: coupon,
                points_used: points,
            },
        )
        .await?;

    println!(
        "{} Transaction {} created for {}.",
        "✓".green(),
        txn.id,
        event.name.bold()
    );
    println!("  Quantity: {}", txn.quantity);
    println!("  Total:    {}", format_price(txn.total_price));
    if let Some(deadline) = txn.payment_deadline {
        println!("  Pay by:   {}", format_datetime(deadline));
    }
    println!();
    println!(
        "Upload your payment proof with {}.",
        format!("eventra txn proof {} --file <image>", txn.id).cyan()
    );

    Ok(())
}

/// Reject quantities exceeding the displayed remaining seats.
pub fn validate_quantity(qty: u32, remaining: u32) -> Result<()> {
    if qty == 0 {
        return Err(Error::Validation(
            "Quantity must be at least 1.".to_string(),
        ));
    }
    if qty > remaining {
        return Err(Error::Validation(format!(
            "Insufficient seats: {} remaining, requested {}.",
            remaining, qty
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_within_remaining_is_ok() {
        assert!(validate_quantity(3, 3).is_ok());
        assert!(validate_quantity(1, 10).is_ok());
    }

    #[test]
    fn test_quantity_over_remaining_is_rejected() {
        let err = validate_quantity(5, 3).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Insufficient seats"));
        assert!(msg.contains("3 remaining"));
        assert!(msg.contains("requested 5"));
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        assert!(validate_quantity(0, 3).is_err());
    }
}
