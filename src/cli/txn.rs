//! Transaction commands

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};
use log::debug;
use serde::Serialize;

use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::cli::handlers::print_list;
use crate::cli::OutputFormat;
use crate::client::OrderApi;
use crate::client::models::{PaymentProofRequest, Role, Transaction, TransactionStatus};
use crate::error::Result;
use crate::models::TransactionDisplay;

/// Transactions bucketed by status for the review view.
///
/// Grouping happens client-side over the fetched list; each bucket is
/// sorted by event name, ties broken by ascending transaction id.
#[derive(Debug, Default, Serialize)]
pub struct GroupedTransactions {
    pub pending: Vec<Transaction>,
    pub accepted: Vec<Transaction>,
    pub rejected: Vec<Transaction>,
    pub other: Vec<Transaction>,
}

/// Bucket transactions by status.
pub fn group_transactions(txns: Vec<Transaction>) -> GroupedTransactions {
    let mut groups = GroupedTransactions::default();

    for txn in txns {
        match txn.status {
            TransactionStatus::WaitingForAdminConfirmation => groups.pending.push(txn),
            TransactionStatus::Done => groups.accepted.push(txn),
            TransactionStatus::Rejected => groups.rejected.push(txn),
            _ => groups.other.push(txn),
        }
    }

    for bucket in [
        &mut groups.pending,
        &mut groups.accepted,
        &mut groups.rejected,
        &mut groups.other,
    ] {
        bucket.sort_by(|a, b| a.event_name.cmp(&b.event_name).then(a.id.cmp(&b.id)));
    }

    groups
}

/// Run the transaction list command.
///
/// Organizer accounts see transactions across their events; customers see
/// their own purchases.
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::authenticated(opts).await?;
    let txns = fetch_transactions(&ctx).await?;

    render_grouped(txns, ctx.format)
}

async fn fetch_transactions(ctx: &CommandContext) -> Result<Vec<Transaction>> {
    let token = ctx.token()?;
    let txns = if ctx.user()?.role == Role::Organizer {
        ctx.client().list_organizer_transactions(token).await?
    } else {
        ctx.client().list_transactions(token).await?
    };
    debug!("Fetched {} transactions", txns.len());
    Ok(txns)
}

fn render_grouped(txns: Vec<Transaction>, format: OutputFormat) -> Result<()> {
    let groups = group_transactions(txns);

    match format {
        OutputFormat::Json => {
            let output = crate::output::json::format_json(&groups)?;
            println!("{}", output);
        }
        OutputFormat::Table => {
            print_group("Pending", groups.pending, format)?;
            print_group("Accepted", groups.accepted, format)?;
            print_group("Rejected", groups.rejected, format)?;
            print_group("Other", groups.other, format)?;
        }
    }

    Ok(())
}

fn print_group(title: &str, txns: Vec<Transaction>, format: OutputFormat) -> Result<()> {
    println!("{}", format!("{} ({})", title, txns.len()).bold());
    if !txns.is_empty() {
        print_list::<Transaction, TransactionDisplay>(txns, format)?;
    }
    println!();
    Ok(())
}

/// Run the transaction accept command
pub async fn accept(opts: &GlobalOptions, transaction_id: u64, yes: bool) -> Result<()> {
    decide(opts, transaction_id, yes, Decision::Accept).await
}

/// Run the transaction reject command
pub async fn reject(opts: &GlobalOptions, transaction_id: u64, yes: bool) -> Result<()> {
    decide(opts, transaction_id, yes, Decision::Reject).await
}

enum Decision {
    Accept,
    Reject,
}

async fn decide(
    opts: &GlobalOptions,
    transaction_id: u64,
    yes: bool,
    decision: Decision,
) -> Result<()> {
    let verb = match decision {
        Decision::Accept => "Accept",
        Decision::Reject => "Reject",
    };

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} transaction {}?", verb, transaction_id))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let ctx = CommandContext::authenticated(opts).await?;
    ctx.require_organizer()?;
    let token = ctx.token()?;

    let txn = match decision {
        Decision::Accept => ctx.client().accept_transaction(token, transaction_id).await?,
        Decision::Reject => ctx.client().reject_transaction(token, transaction_id).await?,
    };
    println!(
        "{} Transaction {} is now {}.",
        "✓".green(),
        txn.id,
        txn.status
    );
    println!();

    // The review view reflects the decision immediately.
    let txns = fetch_transactions(&ctx).await?;
    render_grouped(txns, ctx.format)
}

/// Run the payment-proof upload command
pub async fn proof(
    opts: &GlobalOptions,
    transaction_id: u64,
    file: &std::path::Path,
) -> Result<()> {
    let ctx = CommandContext::authenticated(opts).await?;
    let token = ctx.token()?;

    let asset =
        crate::upload::upload_image(ctx.client(), token, "payment-proofs", file).await?;
    println!("Uploaded proof: {}", asset.secure_url);

    let txn = ctx
        .client()
        .attach_payment_proof(
            token,
            transaction_id,
            &PaymentProofRequest {
                image_url: asset.secure_url,
            },
        )
        .await?;

    println!(
        "{} Transaction {} is now {}.",
        "✓".green(),
        txn.id,
        txn.status
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(id: u64, event_name: &str, status: TransactionStatus) -> Transaction {
        Transaction {
            id,
            event_id: 1,
            event_name: event_name.to_string(),
            user_name: None,
            quantity: 1,
            total_price: 100_000,
            status,
            payment_deadline: None,
            payment_proof_url: None,
            created_at: "2026-05-01T10:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_waiting_for_admin_confirmation_goes_to_pending_only() {
        let groups = group_transactions(vec![txn(
            1,
            "Jazz Night",
            TransactionStatus::WaitingForAdminConfirmation,
        )]);

        assert_eq!(groups.pending.len(), 1);
        assert!(groups.accepted.is_empty());
        assert!(groups.rejected.is_empty());
        assert!(groups.other.is_empty());
    }

    #[test]
    fn test_statuses_route_to_their_buckets() {
        let groups = group_transactions(vec![
            txn(1, "A", TransactionStatus::Done),
            txn(2, "B", TransactionStatus::Rejected),
            txn(3, "C", TransactionStatus::WaitingForPayment),
            txn(4, "D", TransactionStatus::Expired),
            txn(5, "E", TransactionStatus::Other("ON_HOLD".to_string())),
        ]);

        assert_eq!(groups.accepted.len(), 1);
        assert_eq!(groups.rejected.len(), 1);
        assert_eq!(groups.other.len(), 3);
        assert!(groups.pending.is_empty());
    }

    #[test]
    fn test_buckets_sort_by_event_name_then_id() {
        let groups = group_transactions(vec![
            txn(9, "Jazz Night", TransactionStatus::Done),
            txn(4, "Acoustic Eve", TransactionStatus::Done),
            txn(2, "Jazz Night", TransactionStatus::Done),
        ]);

        let order: Vec<u64> = groups.accepted.iter().map(|t| t.id).collect();
        assert_eq!(order, vec![4, 2, 9]);
    }
}
