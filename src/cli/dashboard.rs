//! Organizer dashboard command

use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::cli::handlers::print_list;
use crate::client::models::{
    Event, StatsBucket, StatsGranularity, StatsParams, Transaction, TransactionStatus,
};
use crate::client::{OrderApi, OrganizerApi};
use crate::error::{Error, Result};
use crate::models::{EventDisplay, StatsDisplay, TransactionDisplay};

/// Sections of the organizer overview that loaded.
///
/// A failed fetch leaves its section `None` without rolling back the
/// others; in JSON output that section renders as `null`.
#[derive(Serialize)]
struct Overview {
    transactions: Option<Vec<Transaction>>,
    events: Option<Vec<Event>>,
    stats: Option<Vec<StatsBucket>>,
}

/// Fold one settled fetch into its section, recording a labelled failure.
fn section<T>(name: &str, result: Result<Vec<T>>, failures: &mut Vec<String>) -> Option<Vec<T>> {
    match result {
        Ok(items) => Some(items),
        Err(e) => {
            failures.push(format!("{}: {}", name, e));
            None
        }
    }
}

/// Settle the three concurrent fetches: successes become sections,
/// failures become labelled messages for one aggregated error.
fn settle(
    transactions: Result<Vec<Transaction>>,
    events: Result<Vec<Event>>,
    stats: Result<Vec<StatsBucket>>,
) -> (Overview, Vec<String>) {
    let mut failures = Vec::new();

    let overview = Overview {
        transactions: section("transactions", transactions, &mut failures),
        events: section("events", events, &mut failures),
        stats: section("stats", stats, &mut failures),
    };

    (overview, failures)
}

/// One error line covering every section that failed to load.
fn aggregated_message(failures: &[String]) -> String {
    format!(
        "some dashboard sections failed to load ({})",
        failures.join("; ")
    )
}

/// Run the dashboard command: refresh the organizer's transactions, events,
/// and monthly stats in one shot.
///
/// The three fetches run concurrently and all settle before anything
/// renders. Whatever succeeded is shown and the failures surface as one
/// aggregated error.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::authenticated(opts).await?;
    ctx.require_organizer()?;
    let token = ctx.token()?;

    let stats_params = StatsParams {
        group_by: StatsGranularity::Month,
        from: None,
        to: None,
    };

    let (txns, events, stats) = futures::join!(
        ctx.client().list_organizer_transactions(token),
        ctx.client().list_own_events(token),
        ctx.client().stats(token, &stats_params),
    );

    let (overview, failures) = settle(txns, events, stats);

    match ctx.format {
        OutputFormat::Json => {
            // One machine-clean document; failed sections are null.
            let output = crate::output::json::format_json(&overview)?;
            println!("{}", output);
        }
        OutputFormat::Table => {
            if let Some(txns) = overview.transactions {
                let pending = txns
                    .iter()
                    .filter(|t| t.status == TransactionStatus::WaitingForAdminConfirmation)
                    .count();
                println!("{} ({} pending review)", "Transactions".bold(), pending);
                print_list::<Transaction, TransactionDisplay>(txns, ctx.format)?;
                println!();
            }

            if let Some(events) = overview.events {
                println!("{}", "Events".bold());
                print_list::<Event, EventDisplay>(events, ctx.format)?;
                println!();
            }

            if let Some(stats) = overview.stats {
                println!("{}", "Sales by month".bold());
                print_list::<StatsBucket, StatsDisplay>(stats, ctx.format)?;
            }
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(Error::Other(aggregated_message(&failures)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn txn() -> Transaction {
        Transaction {
            id: 10,
            event_id: 1,
            event_name: "Jazz Night".to_string(),
            user_name: Some("Ada".to_string()),
            quantity: 2,
            total_price: 300_000,
            status: TransactionStatus::WaitingForAdminConfirmation,
            payment_deadline: None,
            payment_proof_url: None,
            created_at: "2026-05-01T10:00:00Z".parse().unwrap(),
        }
    }

    fn server_error(text: &str) -> crate::error::Error {
        ApiError::ServerError(text.to_string()).into()
    }

    #[test]
    fn test_settle_all_ok_has_no_failures() {
        let (overview, failures) = settle(Ok(vec![txn()]), Ok(Vec::new()), Ok(Vec::new()));

        assert!(failures.is_empty());
        assert_eq!(overview.transactions.as_ref().map(|t| t.len()), Some(1));
        assert!(overview.events.is_some());
        assert!(overview.stats.is_some());
    }

    #[test]
    fn test_settle_keeps_successes_when_one_fetch_fails() {
        let (overview, failures) = settle(
            Ok(vec![txn()]),
            Ok(Vec::new()),
            Err(server_error("request failed with status code 500")),
        );

        // The failed section is dropped; the others are not rolled back.
        assert_eq!(overview.transactions.as_ref().map(|t| t.len()), Some(1));
        assert!(overview.events.is_some());
        assert!(overview.stats.is_none());

        assert_eq!(failures.len(), 1);
        assert_eq!(
            failures[0],
            "stats: request failed with status code 500"
        );
    }

    #[test]
    fn test_settle_collects_every_failure() {
        let (overview, failures) = settle(
            Err(server_error("txn boom")),
            Ok(Vec::new()),
            Err(server_error("stats boom")),
        );

        assert!(overview.transactions.is_none());
        assert!(overview.events.is_some());
        assert!(overview.stats.is_none());
        assert_eq!(failures, vec!["transactions: txn boom", "stats: stats boom"]);
    }

    #[test]
    fn test_aggregated_message_names_each_failed_section() {
        let msg = aggregated_message(&[
            "transactions: txn boom".to_string(),
            "stats: stats boom".to_string(),
        ]);

        assert!(msg.contains("sections failed to load"));
        assert!(msg.contains("transactions: txn boom"));
        assert!(msg.contains("stats: stats boom"));
    }

    #[test]
    fn test_failed_sections_render_as_null_in_json() {
        let (overview, _failures) = settle(
            Ok(vec![txn()]),
            Err(server_error("events boom")),
            Ok(Vec::new()),
        );

        let json = serde_json::to_value(&overview).unwrap();
        assert!(json["transactions"].is_array());
        assert!(json["events"].is_null());
        assert!(json["stats"].is_array());
    }
}
