//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod account;
pub mod args;
pub mod checkout;
pub mod completions;
pub mod context;
pub mod dashboard;
pub mod event;
pub mod handlers;
pub mod init;
pub mod review;
pub mod status;
pub mod stats;
pub mod txn;
pub mod voucher;

pub use args::{EventFilterArgs, OutputFormat, PaginationArgs, SortDir, SortField};
pub use context::CommandContext;

use crate::client::models::StatsGranularity;

/// Eventra CLI - companion for the Eventra ticketing marketplace
#[derive(Parser, Debug)]
#[command(name = "eventra")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "EVENTRA_FORMAT",
        default_value = "table",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "EVENTRA_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the API origin
    #[arg(long, global = true, env = "EVENTRA_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "EVENTRA_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set up Eventra interactively and sign in
    Init,

    /// Show session and configuration status
    Status,

    /// Sign in with email and password
    Login {
        /// Account email (prompted when omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Account password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Create an account and sign in
    Register {
        /// Display name
        #[arg(long)]
        name: String,

        /// Account email
        #[arg(long, short = 'e')]
        email: String,

        /// Account role (customer, organizer)
        #[arg(long, value_enum, default_value = "customer")]
        role: RoleArg,

        /// Referral code of an existing user
        #[arg(long)]
        referral_code: Option<String>,

        /// Account password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Show the profile behind the current session
    Whoami,

    /// Account settings
    #[command(subcommand)]
    Account(AccountCommands),

    /// Browse and manage events
    #[command(subcommand)]
    Event(EventCommands),

    /// Buy tickets for an event
    Checkout {
        /// Event ID to purchase
        event_id: u64,

        /// Number of tickets
        #[arg(long, short = 'q')]
        qty: u32,

        /// Event voucher code
        #[arg(long)]
        voucher: Option<String>,

        /// Personal coupon code
        #[arg(long)]
        coupon: Option<String>,

        /// Referral points to spend
        #[arg(long)]
        points: Option<u64>,
    },

    /// View and manage transactions
    #[command(subcommand)]
    Txn(TxnCommands),

    /// Manage event vouchers
    #[command(subcommand)]
    Voucher(VoucherCommands),

    /// Review attended events
    #[command(subcommand)]
    Review(ReviewCommands),

    /// Organizer sales statistics
    Stats {
        /// Grouping granularity (day, month, year)
        #[arg(long, value_enum, default_value = "month")]
        group_by: GranularityArg,

        /// Range start, YYYY-MM-DD
        #[arg(long)]
        from: Option<String>,

        /// Range end, YYYY-MM-DD
        #[arg(long)]
        to: Option<String>,
    },

    /// Organizer overview: transactions, events, and stats in one view
    Dashboard,

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Display version information
    Version,
}

/// Account role argument
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum RoleArg {
    /// Buy tickets and leave reviews
    Customer,
    /// Create and manage events
    Organizer,
}

impl From<RoleArg> for crate::client::models::Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Customer => crate::client::models::Role::Customer,
            RoleArg::Organizer => crate::client::models::Role::Organizer,
        }
    }
}

/// Statistics granularity argument
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum GranularityArg {
    Day,
    Month,
    Year,
}

impl From<GranularityArg> for StatsGranularity {
    fn from(g: GranularityArg) -> Self {
        match g {
            GranularityArg::Day => StatsGranularity::Day,
            GranularityArg::Month => StatsGranularity::Month,
            GranularityArg::Year => StatsGranularity::Year,
        }
    }
}

/// Account settings subcommands
#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Change the account password
    ChangePassword {
        /// Current password (prompted when omitted)
        #[arg(long)]
        old: Option<String>,

        /// New password (prompted when omitted)
        #[arg(long)]
        new: Option<String>,

        /// Confirmation of the new password (prompted when omitted)
        #[arg(long)]
        confirm: Option<String>,
    },
}

/// Event subcommands
#[derive(Subcommand, Debug)]
pub enum EventCommands {
    /// List and search events
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n  \
            eventra event list --q jazz               # Free-text search\n  \
            eventra event list -c MUSIC -l Jakarta    # Category + location\n  \
            eventra event list --sort name --dir asc  # Client-side sort\n  \
            eventra event list --when upcoming        # Hide finished events\n  \
            eventra event list --mine                 # Organizer's own events"
    )]
    List {
        #[command(flatten)]
        filters: EventFilterArgs,

        #[command(flatten)]
        pagination: PaginationArgs,

        /// List the signed-in organizer's own events
        #[arg(long)]
        mine: bool,
    },

    /// Show one event with its reviews
    #[command(visible_alias = "g")]
    Get {
        /// Event ID
        event_id: u64,
    },

    /// Create an event (organizer)
    Create {
        /// Event name
        #[arg(long)]
        name: String,

        /// Description
        #[arg(long, default_value = "")]
        description: String,

        /// Category label
        #[arg(long)]
        category: String,

        /// Location
        #[arg(long)]
        location: String,

        /// Ticket price; 0 for a free event
        #[arg(long)]
        price: u64,

        /// Seat capacity
        #[arg(long)]
        seats: u32,

        /// Start time, RFC 3339 (e.g. 2026-05-01T18:00:00Z)
        #[arg(long)]
        starts: String,

        /// End time, RFC 3339
        #[arg(long)]
        ends: String,

        /// Banner image to upload
        #[arg(long)]
        image: Option<std::path::PathBuf>,
    },

    /// Update an event (organizer)
    Update {
        /// Event ID
        event_id: u64,

        /// Event name
        #[arg(long)]
        name: Option<String>,

        /// Description
        #[arg(long)]
        description: Option<String>,

        /// Category label
        #[arg(long)]
        category: Option<String>,

        /// Location
        #[arg(long)]
        location: Option<String>,

        /// Ticket price
        #[arg(long)]
        price: Option<u64>,

        /// Seat capacity
        #[arg(long)]
        seats: Option<u32>,

        /// Start time, RFC 3339
        #[arg(long)]
        starts: Option<String>,

        /// End time, RFC 3339
        #[arg(long)]
        ends: Option<String>,

        /// Banner image to upload
        #[arg(long)]
        image: Option<std::path::PathBuf>,
    },

    /// List attendees for an event (organizer)
    Attendees {
        /// Event ID
        event_id: u64,
    },
}

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TxnCommands {
    /// List transactions, grouped by status
    #[command(visible_alias = "ls")]
    List,

    /// Accept a transaction awaiting confirmation (organizer)
    Accept {
        /// Transaction ID
        transaction_id: u64,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Reject a transaction awaiting confirmation (organizer)
    Reject {
        /// Transaction ID
        transaction_id: u64,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Upload a payment proof image for a transaction
    Proof {
        /// Transaction ID
        transaction_id: u64,

        /// Image file to upload
        #[arg(long, short = 'f')]
        file: std::path::PathBuf,
    },
}

/// Voucher subcommands
#[derive(Subcommand, Debug)]
pub enum VoucherCommands {
    /// List vouchers for an event
    #[command(visible_alias = "ls")]
    List {
        /// Event ID
        event_id: u64,
    },

    /// Create a voucher for an event
    Create {
        /// Event ID
        event_id: u64,

        /// Redeemable code
        #[arg(long)]
        code: String,

        /// Flat discount per transaction
        #[arg(long)]
        discount: u64,

        /// Validity start, RFC 3339
        #[arg(long)]
        starts: String,

        /// Validity end, RFC 3339
        #[arg(long)]
        ends: String,

        /// Usage cap; omit for unlimited
        #[arg(long)]
        max_uses: Option<u32>,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Update a voucher
    Update {
        /// Event ID
        event_id: u64,

        /// Voucher ID
        voucher_id: u64,

        /// Redeemable code
        #[arg(long)]
        code: String,

        /// Flat discount per transaction
        #[arg(long)]
        discount: u64,

        /// Validity start, RFC 3339
        #[arg(long)]
        starts: String,

        /// Validity end, RFC 3339
        #[arg(long)]
        ends: String,

        /// Usage cap; omit for unlimited
        #[arg(long)]
        max_uses: Option<u32>,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Delete a voucher
    Delete {
        /// Event ID
        event_id: u64,

        /// Voucher ID
        voucher_id: u64,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Review subcommands
#[derive(Subcommand, Debug)]
pub enum ReviewCommands {
    /// Submit a review for an attended event
    Add {
        /// Event ID
        event_id: u64,

        /// Star rating, 1 to 5
        #[arg(long, short = 'r')]
        rating: u8,

        /// Free-text comment
        #[arg(long)]
        comment: Option<String>,
    },
}
