use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "drive-ownership-transfer")]
#[command(about = "Initiate Google Drive file ownership transfers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Authorize against Google Drive and store the resulting token
    Auth {
        /// Path to the OAuth client secret JSON downloaded from the API console
        #[arg(long)]
        client_secret: Option<PathBuf>,

        /// Where to write the token file (defaults under the user config dir)
        #[arg(long)]
        token: Option<PathBuf>,
    },

    /// Offer ownership of a file to another account
    Transfer {
        /// ID of the file to transfer
        file_id: String,

        /// Email address of the prospective new owner
        new_owner: String,

        /// Token file written by `auth` (defaults under the user config dir)
        #[arg(long)]
        token: Option<PathBuf>,
    },
}
