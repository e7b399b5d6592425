use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use echoboard_application::Store;
use echoboard_core::notification::NotificationKind;
use echoboard_infrastructure::ConfigService;
use std::path::PathBuf;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "echoboard")]
#[command(about = "EchoBoard client store - inspect and drive the local session", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Durable storage file, overriding the configured one
    #[arg(long, global = true)]
    storage: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current state as JSON
    State,
    /// Apply a JSON action such as '{"type":"LOGOUT"}'
    Dispatch {
        /// The action object
        action: String,
    },
    /// Store a session from a token and a JSON user profile
    Login {
        #[arg(long)]
        token: String,
        #[arg(long)]
        user: String,
    },
    /// End the session and drop cached projects
    Logout,
    /// Discard the cached project listing
    Invalidate,
    /// Show an error or success message
    Notify {
        kind: NotificationKind,
        text: String,
    },
    /// Clear an error or success message
    Dismiss { kind: NotificationKind },
    /// Print the current user's profile color
    Color,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_service = match cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    };
    let config = config_service.get_config();
    logging::init(&config.log_level);

    let storage_path = match cli.storage {
        Some(path) => path,
        None => config_service
            .storage_path()
            .context("Failed to resolve durable storage path")?,
    };
    let store = Store::open_file(storage_path);

    match cli.command {
        Commands::State => commands::state::print(&store)?,
        Commands::Dispatch { action } => commands::state::dispatch(&store, &action)?,
        Commands::Login { token, user } => commands::session::login(&store, token, &user)?,
        Commands::Logout => commands::session::logout(&store)?,
        Commands::Invalidate => commands::state::invalidate(&store)?,
        Commands::Notify { kind, text } => commands::state::notify(&store, kind, text)?,
        Commands::Dismiss { kind } => commands::state::dismiss(&store, kind)?,
        Commands::Color => commands::state::color(&store),
    }

    Ok(())
}
