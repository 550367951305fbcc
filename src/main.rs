//! Eventra CLI - companion for the Eventra ticketing marketplace

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod session;
mod upload;

use cli::args::GlobalOptions;
use cli::{AccountCommands, Cli, Commands, EventCommands, ReviewCommands, TxnCommands, VoucherCommands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("eventra version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => cli::completions::run(shell),

        Commands::Login { email, password } => cli::account::login(&opts, email, password).await,
        Commands::Register {
            name,
            email,
            role,
            referral_code,
            password,
        } => {
            cli::account::register(&opts, name, email, role.into(), referral_code, password).await
        }
        Commands::Logout => cli::account::logout(&opts),
        Commands::Whoami => cli::account::whoami(&opts).await,
        Commands::Account(account_cmd) => match account_cmd {
            AccountCommands::ChangePassword { old, new, confirm } => {
                cli::account::change_password(&opts, old, new, confirm).await
            }
        },

        Commands::Event(event_cmd) => match event_cmd {
            EventCommands::List {
                filters,
                pagination,
                mine,
            } => cli::event::list(&opts, &filters, &pagination, mine).await,
            EventCommands::Get { event_id } => cli::event::get(&opts, event_id).await,
            EventCommands::Create {
                name,
                description,
                category,
                location,
                price,
                seats,
                starts,
                ends,
                image,
            } => {
                cli::event::create(
                    &opts,
                    cli::event::CreateEventArgs {
                        name,
                        description,
                        category,
                        location,
                        price,
                        seats,
                        starts,
                        ends,
                        image,
                    },
                )
                .await
            }
            EventCommands::Update {
                event_id,
                name,
                description,
                category,
                location,
                price,
                seats,
                starts,
                ends,
                image,
            } => {
                cli::event::update(
                    &opts,
                    event_id,
                    cli::event::UpdateEventArgs {
                        name,
                        description,
                        category,
                        location,
                        price,
                        seats,
                        starts,
                        ends,
                        image,
                    },
                )
                .await
            }
            EventCommands::Attendees { event_id } => cli::event::attendees(&opts, event_id).await,
        },

        Commands::Checkout {
            event_id,
            qty,
            voucher,
            coupon,
            points,
        } => cli::checkout::run(&opts, event_id, qty, voucher, coupon, points).await,

        Commands::Txn(txn_cmd) => match txn_cmd {
            TxnCommands::List => cli::txn::list(&opts).await,
            TxnCommands::Accept {
                transaction_id,
                yes,
            } => cli::txn::accept(&opts, transaction_id, yes).await,
            TxnCommands::Reject {
                transaction_id,
                yes,
            } => cli::txn::reject(&opts, transaction_id, yes).await,
            TxnCommands::Proof {
                transaction_id,
                file,
            } => cli::txn::proof(&opts, transaction_id, &file).await,
        },

        Commands::Voucher(voucher_cmd) => match voucher_cmd {
            VoucherCommands::List { event_id } => cli::voucher::list(&opts, event_id).await,
            VoucherCommands::Create {
                event_id,
                code,
                discount,
                starts,
                ends,
                max_uses,
                yes,
            } => {
                cli::voucher::create(
                    &opts,
                    event_id,
                    cli::voucher::VoucherArgs {
                        code,
                        discount,
                        starts,
                        ends,
                        max_uses,
                    },
                    yes,
                )
                .await
            }
            VoucherCommands::Update {
                event_id,
                voucher_id,
                code,
                discount,
                starts,
                ends,
                max_uses,
                yes,
            } => {
                cli::voucher::update(
                    &opts,
                    event_id,
                    voucher_id,
                    cli::voucher::VoucherArgs {
                        code,
                        discount,
                        starts,
                        ends,
                        max_uses,
                    },
                    yes,
                )
                .await
            }
            VoucherCommands::Delete {
                event_id,
                voucher_id,
                yes,
            } => cli::voucher::delete(&opts, event_id, voucher_id, yes).await,
        },

        Commands::Review(review_cmd) => match review_cmd {
            ReviewCommands::Add {
                event_id,
                rating,
                comment,
            } => cli::review::add(&opts, event_id, rating, comment).await,
        },

        Commands::Stats { group_by, from, to } => {
            cli::stats::run(&opts, group_by.into(), from, to).await
        }

        Commands::Dashboard => cli::dashboard::run(&opts).await,
    }
}
