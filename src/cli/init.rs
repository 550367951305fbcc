//! Init command implementation

use colored::Colorize;
use dialoguer::{Confirm, Input, Password, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::client::models::{RegisterRequest, Role};
use crate::config::Config;
use crate::error::Result;

/// Run the init command: create the config file and sign in interactively.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to Eventra!".bold().green());
    println!("Let's get you signed in.\n");

    // Persist the API origin override, if any, before signing in.
    let mut config = Config::load_or_default(opts.config_ref())?;
    if let Some(host) = opts.api_host_ref() {
        config.api_host = Some(host.to_string());
    }
    config.save_at(opts.config_ref())?;

    let has_account = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Do you already have an account?")
        .default(true)
        .interact()?;

    let mut ctx = CommandContext::new(opts)?;

    let user = if has_account {
        let email: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Email")
            .interact_text()?;
        let password = Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()?;

        println!("\n{}", "Signing in...".cyan());
        ctx.session.login(&email, &password).await?
    } else {
        let name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Display name")
            .interact_text()?;
        let email: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Email")
            .interact_text()?;
        let password = Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Choose a password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?;
        let organizer = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Will you be organizing events?")
            .default(false)
            .interact()?;
        let referral: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Referral code (leave empty to skip)")
            .allow_empty(true)
            .interact_text()?;

        println!("\n{}", "Creating your account...".cyan());
        ctx.session
            .register(RegisterRequest {
                name,
                email,
                password,
                role: if organizer {
                    Role::Organizer
                } else {
                    Role::Customer
                },
                referral_code: if referral.is_empty() {
                    None
                } else {
                    Some(referral)
                },
            })
            .await?
    };

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!("{} Signed in as {}", "✓".green(), user.name.bold());
    println!("Configuration saved to: {}", config_path.display());

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Browse events", "eventra event list".cyan());
    println!("  {} - Show session status", "eventra status".cyan());

    Ok(())
}
