//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display session and configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "Eventra Status".bold());

    match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            let config_path = Config::resolve_path(opts.config_ref())?;
            println!("Config file: {}", config_path.display().to_string().cyan());

            // API origin (only called out when not the local default)
            let host = opts
                .api_host_ref()
                .unwrap_or_else(|| config.api_host());
            if host != crate::client::DEFAULT_API_HOST {
                println!("API origin:  {}", host.cyan());
            }

            println!();

            if config.token.is_some() {
                println!(
                    "{} Session token stored (validated on next command)",
                    "✓".green()
                );
                println!("  → Run {} to see who you are", "eventra whoami".cyan());
            } else {
                println!("{} Not signed in", "○".dimmed());
                println!("  → Run {} to sign in", "eventra login".cyan());
            }

            println!();
        }
        Err(_) => {
            println!("{} Configuration not found", "✗".red());
            println!();
            println!(
                "Run {} to create a configuration file.",
                "eventra init".cyan()
            );
            println!();
        }
    }

    Ok(())
}
