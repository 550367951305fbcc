//! Voucher management commands

use chrono::{DateTime, Utc};
use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::cli::event::parse_datetime;
use crate::cli::handlers::print_list_with_count;
use crate::client::OrganizerApi;
use crate::client::models::{Voucher, VoucherPayload};
use crate::error::{Error, Result};
use crate::models::VoucherDisplay;

/// Run the voucher list command
pub async fn list(opts: &GlobalOptions, event_id: u64) -> Result<()> {
    let ctx = CommandContext::authenticated(opts).await?;
    ctx.require_organizer()?;

    let vouchers = ctx.client().list_vouchers(ctx.token()?, event_id).await?;
    let total = vouchers.len();

    print_list_with_count::<Voucher, VoucherDisplay>(vouchers, total, ctx.format)
}

/// Raw voucher field arguments before validation.
pub struct VoucherArgs {
    pub code: String,
    pub discount: u64,
    pub starts: String,
    pub ends: String,
    pub max_uses: Option<u32>,
}

/// Run the voucher create command
pub async fn create(opts: &GlobalOptions, event_id: u64, args: VoucherArgs, yes: bool) -> Result<()> {
    let payload = validate_voucher(&args)?;

    if !confirm(
        yes,
        &format!("Create voucher {} for event {}?", payload.code, event_id),
    )? {
        return Ok(());
    }

    let ctx = CommandContext::authenticated(opts).await?;
    ctx.require_organizer()?;

    let voucher = ctx
        .client()
        .create_voucher(ctx.token()?, event_id, &payload)
        .await?;
    println!(
        "{} Created voucher {} ({})",
        "✓".green(),
        voucher.code.bold(),
        voucher.id
    );
    Ok(())
}

/// Run the voucher update command
pub async fn update(
    opts: &GlobalOptions,
    event_id: u64,
    voucher_id: u64,
    args: VoucherArgs,
    yes: bool,
) -> Result<()> {
    let payload = validate_voucher(&args)?;

    if !confirm(yes, &format!("Update voucher {}?", voucher_id))? {
        return Ok(());
    }

    let ctx = CommandContext::authenticated(opts).await?;
    ctx.require_organizer()?;

    let voucher = ctx
        .client()
        .update_voucher(ctx.token()?, event_id, voucher_id, &payload)
        .await?;
    println!("{} Updated voucher {}", "✓".green(), voucher.code);
    Ok(())
}

/// Run the voucher delete command
pub async fn delete(opts: &GlobalOptions, event_id: u64, voucher_id: u64, yes: bool) -> Result<()> {
    if !confirm(yes, &format!("Delete voucher {}?", voucher_id))? {
        return Ok(());
    }

    let ctx = CommandContext::authenticated(opts).await?;
    ctx.require_organizer()?;

    ctx.client()
        .delete_voucher(ctx.token()?, event_id, voucher_id)
        .await?;
    println!("{} Deleted voucher {}", "✓".green(), voucher_id);
    Ok(())
}

fn confirm(yes: bool, prompt: &str) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    if !confirmed {
        println!("Aborted.");
    }
    Ok(confirmed)
}

/// Client-side mirror of the server's voucher validation: non-empty code,
/// end after start, positive discount, positive-or-absent usage cap.
pub fn validate_voucher(args: &VoucherArgs) -> Result<VoucherPayload> {
    let code = args.code.trim();
    if code.is_empty() {
        return Err(Error::Validation(
            "Voucher code must not be empty.".to_string(),
        ));
    }

    if args.discount == 0 {
        return Err(Error::Validation(
            "Voucher discount must be positive.".to_string(),
        ));
    }

    let starts: DateTime<Utc> = parse_datetime(&args.starts)?;
    let ends: DateTime<Utc> = parse_datetime(&args.ends)?;
    if ends <= starts {
        return Err(Error::Validation(
            "Voucher end must be after its start.".to_string(),
        ));
    }

    if args.max_uses == Some(0) {
        return Err(Error::Validation(
            "Voucher max uses must be positive when set.".to_string(),
        ));
    }

    Ok(VoucherPayload {
        code: code.to_string(),
        discount_amount: args.discount,
        starts_at: starts,
        ends_at: ends,
        max_uses: args.max_uses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> VoucherArgs {
        VoucherArgs {
            code: "EARLYBIRD".to_string(),
            discount: 50_000,
            starts: "2026-01-01T00:00:00Z".to_string(),
            ends: "2026-02-01T00:00:00Z".to_string(),
            max_uses: Some(100),
        }
    }

    #[test]
    fn test_valid_voucher_passes() {
        let payload = validate_voucher(&args()).unwrap();
        assert_eq!(payload.code, "EARLYBIRD");
        assert_eq!(payload.max_uses, Some(100));
    }

    #[test]
    fn test_empty_code_rejected() {
        let mut a = args();
        a.code = "   ".to_string();
        let err = validate_voucher(&a).unwrap_err();
        assert!(err.to_string().contains("code"));
    }

    #[test]
    fn test_end_before_start_rejected() {
        let mut a = args();
        a.ends = "2025-12-01T00:00:00Z".to_string();
        let err = validate_voucher(&a).unwrap_err();
        assert!(err.to_string().contains("after its start"));
    }

    #[test]
    fn test_zero_discount_rejected() {
        let mut a = args();
        a.discount = 0;
        assert!(validate_voucher(&a).is_err());
    }

    #[test]
    fn test_zero_max_uses_rejected_but_absent_allowed() {
        let mut a = args();
        a.max_uses = Some(0);
        assert!(validate_voucher(&a).is_err());

        a.max_uses = None;
        assert!(validate_voucher(&a).unwrap().max_uses.is_none());
    }
}
