use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "profilecraft")]
#[command(about = "ProfileCraft CLI - headless portfolio builder engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the public portfolio page for a username to stdout
    Preview {
        /// Username path segment; its first dash token selects the template
        username: String,
    },
    /// Run a scripted dashboard editing session and print the transcript
    Dashboard {
        /// Username whose draft is loaded
        username: String,
    },
    /// Print the demo portfolio as JSON
    Demo,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Preview { username } => commands::preview::run(&username).await?,
        Commands::Dashboard { username } => commands::dashboard::run(&username).await?,
        Commands::Demo => commands::demo::run()?,
    }

    Ok(())
}
