use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "satchel")]
#[command(about = "Satchel - school app client from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and persist the session
    Login {
        email: String,
        password: String,
    },
    /// Clear the persisted session
    Logout,
    /// Show the current session state
    Status,
    /// List notifications for the logged-in user
    Notifications {
        /// Restrict to one category
        #[arg(long)]
        category: Option<String>,
    },
    /// List news items
    News,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Login { email, password } => commands::auth::login(&email, &password).await?,
        Commands::Logout => commands::auth::logout().await?,
        Commands::Status => commands::auth::status().await?,
        Commands::Notifications { category } => {
            commands::feed::notifications(category.as_deref()).await?
        }
        Commands::News => commands::feed::news().await?,
    }

    Ok(())
}
