mod api;
mod auth;
mod cli;
mod commands;
mod credentials;
mod error;
mod models;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Auth {
            client_secret,
            token,
        } => commands::auth::run(client_secret, token).await,
        Commands::Transfer {
            file_id,
            new_owner,
            token,
        } => commands::transfer::run(&file_id, &new_owner, token).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
