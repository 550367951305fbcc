//! Event browsing and management commands

use chrono::{DateTime, Utc};
use colored::Colorize;
use log::debug;

use crate::cli::args::{EventFilterArgs, EventWhen, GlobalOptions, PaginationArgs};
use crate::cli::context::CommandContext;
use crate::cli::handlers::{print_list, print_list_with_count};
use crate::cli::{OutputFormat, SortDir, SortField};
use crate::client::models::{Event, EventPayload, Review};
use crate::client::{CatalogApi, OrganizerApi, fetch_remaining_pages};
use crate::error::{Error, Result};
use crate::models::{AttendeeDisplay, EventDisplay, ReviewDisplay};
use crate::output::formatters::{format_datetime, format_price};

/// Run the event list command
pub async fn list(
    opts: &GlobalOptions,
    filters: &EventFilterArgs,
    pagination: &PaginationArgs,
    mine: bool,
) -> Result<()> {
    if mine {
        return list_mine(opts, filters).await;
    }

    let ctx = CommandContext::new(opts)?;
    let server_filters = filters.to_filters();
    let mut params = pagination.to_params();
    if params.limit.is_none() {
        params = params.limit(ctx.config.preferences.page_size);
    }

    debug!("Fetching events with filters {:?}", server_filters);
    let page = ctx.client().list_events(&server_filters, &params).await?;

    let has_more = pagination.all && page.has_more_after(1);
    let total_pages = page.total_pages;
    let mut events = page.items;
    let server_total = page.total;

    if has_more {
        let limit = params.limit.unwrap_or(crate::client::DEFAULT_PAGE_SIZE);
        let client = ctx.client();
        let rest = fetch_remaining_pages(total_pages, |page_no| {
            let f = server_filters.clone();
            async move {
                let params = crate::client::PageParams::new().page(page_no).limit(limit);
                Ok(client.list_events(&f, &params).await?.items)
            }
        })
        .await?;
        events.extend(rest);
    }

    render_event_list(events, server_total, filters, ctx.format)
}

/// Organizer's own events; same client-side derivations as the public list.
async fn list_mine(opts: &GlobalOptions, filters: &EventFilterArgs) -> Result<()> {
    let ctx = CommandContext::authenticated(opts).await?;
    ctx.require_organizer()?;

    let events = ctx.client().list_own_events(ctx.token()?).await?;
    let total = events.len();

    render_event_list(events, total, filters, ctx.format)
}

/// Apply client-side derivations (upcoming/past partition, sorting) and
/// print the resulting table plus its result count.
fn render_event_list(
    mut events: Vec<Event>,
    server_total: usize,
    filters: &EventFilterArgs,
    format: OutputFormat,
) -> Result<()> {
    let filtered_locally = filters.when.is_some();
    if let Some(when) = filters.when {
        events = partition_events(events, when, Utc::now());
    }

    if let Some(sort) = filters.sort {
        let dir = filters.dir.unwrap_or(SortDir::Asc);
        sort_events(&mut events, sort, dir);
    }

    // The server total is authoritative unless the list was narrowed here.
    let total = if filtered_locally {
        events.len()
    } else {
        server_total
    };

    print_list_with_count::<Event, EventDisplay>(events, total, format)
}

/// Keep only upcoming or past events, judged against each event's end time.
pub fn partition_events(events: Vec<Event>, when: EventWhen, now: DateTime<Utc>) -> Vec<Event> {
    events
        .into_iter()
        .filter(|e| match when {
            EventWhen::Upcoming => !e.is_past(now),
            EventWhen::Past => e.is_past(now),
        })
        .collect()
}

/// Sort events in place.
///
/// Name sorting breaks ties by ascending id so equal names render in a
/// deterministic order; date sorting is stable, preserving the fetched
/// order for identical timestamps.
pub fn sort_events(events: &mut [Event], field: SortField, dir: SortDir) {
    match field {
        SortField::Name => {
            events.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        }
        SortField::Date => {
            events.sort_by(|a, b| a.start_date.cmp(&b.start_date));
        }
    }

    if dir == SortDir::Desc {
        events.reverse();
    }
}

/// Run the event get command: the event plus its reviews, fetched
/// concurrently.
pub async fn get(opts: &GlobalOptions, event_id: u64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let (event, reviews) = futures::join!(
        ctx.client().get_event(event_id),
        ctx.client().list_reviews(event_id),
    );
    let event = event?;
    let reviews = reviews?;

    match ctx.format {
        OutputFormat::Table => {
            print_event_detail(&event);
            println!();
            if reviews.is_empty() {
                println!("No reviews yet.");
            } else {
                println!("{}", "Reviews".bold());
                print_list::<Review, ReviewDisplay>(reviews, ctx.format)?;
            }
        }
        OutputFormat::Json => {
            #[derive(serde::Serialize)]
            struct Detail {
                event: Event,
                reviews: Vec<Review>,
            }
            let output = crate::output::json::format_json(&Detail { event, reviews })?;
            println!("{}", output);
        }
    }

    Ok(())
}

fn print_event_detail(event: &Event) {
    println!("{}", event.name.bold());
    println!();
    println!("  ID:        {}", event.id);
    println!("  Category:  {}", event.category);
    println!("  Location:  {}", event.location);
    println!("  Starts:    {}", format_datetime(event.start_date));
    println!("  Ends:      {}", format_datetime(event.end_date));
    println!("  Price:     {}", format_price(event.price));
    println!(
        "  Seats:     {} of {} remaining",
        event.remaining_seats, event.total_seats
    );
    if !event.description.is_empty() {
        println!();
        println!("  {}", event.description);
    }
}

/// Arguments for event create, bundled to keep the handler signature sane.
pub struct CreateEventArgs {
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub price: u64,
    pub seats: u32,
    pub starts: String,
    pub ends: String,
    pub image: Option<std::path::PathBuf>,
}

/// Run the event create command
pub async fn create(opts: &GlobalOptions, args: CreateEventArgs) -> Result<()> {
    let starts = parse_datetime(&args.starts)?;
    let ends = parse_datetime(&args.ends)?;
    if ends <= starts {
        return Err(Error::Validation(
            "Event end must be after its start.".to_string(),
        ));
    }

    let ctx = CommandContext::authenticated(opts).await?;
    ctx.require_organizer()?;

    let image_url = match args.image {
        Some(ref path) => Some(upload_banner(&ctx, path).await?),
        None => None,
    };

    let payload = EventPayload {
        name: Some(args.name),
        description: Some(args.description),
        category: Some(args.category),
        location: Some(args.location),
        price: Some(args.price),
        total_seats: Some(args.seats),
        start_date: Some(starts),
        end_date: Some(ends),
        image_url,
    };

    let event = ctx.client().create_event(ctx.token()?, &payload).await?;
    println!(
        "{} Created event {} ({})",
        "✓".green(),
        event.name.bold(),
        event.id
    );
    Ok(())
}

/// Arguments for event update; unset fields are left unchanged server-side.
#[derive(Default)]
pub struct UpdateEventArgs {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub price: Option<u64>,
    pub seats: Option<u32>,
    pub starts: Option<String>,
    pub ends: Option<String>,
    pub image: Option<std::path::PathBuf>,
}

/// Run the event update command
pub async fn update(opts: &GlobalOptions, event_id: u64, args: UpdateEventArgs) -> Result<()> {
    let starts = args.starts.as_deref().map(parse_datetime).transpose()?;
    let ends = args.ends.as_deref().map(parse_datetime).transpose()?;
    if let (Some(s), Some(e)) = (starts, ends) {
        if e <= s {
            return Err(Error::Validation(
                "Event end must be after its start.".to_string(),
            ));
        }
    }

    let ctx = CommandContext::authenticated(opts).await?;
    ctx.require_organizer()?;

    let image_url = match args.image {
        Some(ref path) => Some(upload_banner(&ctx, path).await?),
        None => None,
    };

    let payload = EventPayload {
        name: args.name,
        description: args.description,
        category: args.category,
        location: args.location,
        price: args.price,
        total_seats: args.seats,
        start_date: starts,
        end_date: ends,
        image_url,
    };

    let event = ctx
        .client()
        .update_event(ctx.token()?, event_id, &payload)
        .await?;
    println!("{} Updated event {} ({})", "✓".green(), event.name, event.id);
    Ok(())
}

async fn upload_banner(ctx: &CommandContext, path: &std::path::Path) -> Result<String> {
    let asset = crate::upload::upload_image(ctx.client(), ctx.token()?, "events", path).await?;
    println!("Uploaded banner: {}", asset.secure_url);
    Ok(asset.secure_url)
}

/// Run the event attendees command
pub async fn attendees(opts: &GlobalOptions, event_id: u64) -> Result<()> {
    let ctx = CommandContext::authenticated(opts).await?;
    ctx.require_organizer()?;

    let attendees = ctx.client().list_attendees(ctx.token()?, event_id).await?;
    let total = attendees.len();

    print_list_with_count::<_, AttendeeDisplay>(attendees, total, ctx.format)
}

/// Parse an RFC 3339 timestamp argument.
pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>> {
    value.parse::<DateTime<Utc>>().map_err(|_| {
        Error::Validation(format!(
            "Invalid timestamp '{}'; use RFC 3339 like 2026-05-01T18:00:00Z",
            value
        ))
    })
}
