//! Session and account commands

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::client::AuthApi;
use crate::client::models::{ChangePasswordRequest, RegisterRequest, Role, UserProfile};
use crate::error::{Error, Result};

/// Run the login command
pub async fn login(
    opts: &GlobalOptions,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let email = match email {
        Some(e) => e,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Email")
            .interact_text()?,
    };
    let password = match password {
        Some(p) => p,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()?,
    };

    let mut ctx = CommandContext::new(opts)?;
    let user = ctx.session.login(&email, &password).await?;

    print_signed_in(&user);
    Ok(())
}

/// Run the register command
pub async fn register(
    opts: &GlobalOptions,
    name: String,
    email: String,
    role: Role,
    referral_code: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Choose a password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?,
    };

    let mut ctx = CommandContext::new(opts)?;
    let user = ctx
        .session
        .register(RegisterRequest {
            name,
            email,
            password,
            role,
            referral_code,
        })
        .await?;

    println!("{} Account created.", "✓".green());
    print_signed_in(&user);
    Ok(())
}

/// Run the logout command
pub fn logout(opts: &GlobalOptions) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;
    let was_signed_in = ctx.session.token().is_some();
    ctx.session.logout()?;

    if was_signed_in {
        println!("Signed out.");
    } else {
        println!("Already signed out.");
    }
    println!("Run {} to sign back in.", "eventra login".cyan());
    Ok(())
}

/// Run the whoami command
pub async fn whoami(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::authenticated(opts).await?;
    let user = ctx.user()?;

    println!("{}", "Signed in as".bold());
    println!();
    println!("  Name:          {}", user.name);
    println!("  Email:         {}", user.email);
    println!("  Role:          {}", user.role);
    println!("  Referral code: {}", user.referral_code);
    if let Some(points) = user.points {
        println!("  Points:        {}", points);
    }

    Ok(())
}

/// Run the change-password command.
///
/// The confirmation check runs before anything touches the network; a
/// mismatch never produces a request.
pub async fn change_password(
    opts: &GlobalOptions,
    old: Option<String>,
    new: Option<String>,
    confirm: Option<String>,
) -> Result<()> {
    let old = match old {
        Some(p) => p,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Current password")
            .interact()?,
    };
    let new = match new {
        Some(p) => p,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("New password")
            .interact()?,
    };
    let confirm = match confirm {
        Some(p) => p,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Confirm new password")
            .interact()?,
    };

    validate_password_confirmation(&new, &confirm)?;

    let ctx = CommandContext::authenticated(opts).await?;
    ctx.client()
        .change_password(
            ctx.token()?,
            &ChangePasswordRequest {
                old_password: old,
                new_password: new,
            },
        )
        .await?;

    println!("{} Password changed.", "✓".green());
    Ok(())
}

/// Client-side mirror of the server's confirmation check.
pub fn validate_password_confirmation(new: &str, confirm: &str) -> Result<()> {
    if new != confirm {
        return Err(Error::Validation(
            "Password confirmation does not match.".to_string(),
        ));
    }
    Ok(())
}

fn print_signed_in(user: &UserProfile) {
    println!(
        "{} Signed in as {} ({})",
        "✓".green(),
        user.name.bold(),
        user.role
    );
    println!(
        "Try {} to browse events.",
        "eventra event list".cyan()
    );
}
