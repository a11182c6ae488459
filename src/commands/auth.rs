use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::auth::{self, ConsoleCodeProvider};
use crate::credentials::{self, ClientSecret};

pub async fn run(client_secret: Option<PathBuf>, token: Option<PathBuf>) -> Result<()> {
    let secret_path = client_secret.unwrap_or_else(credentials::default_client_secret_path);
    let token_path = token.unwrap_or_else(credentials::default_token_path);

    let secret = ClientSecret::load(&secret_path)?;

    let http = reqwest::Client::builder()
        .build()
        .context("Failed to create HTTP client")?;
    let mut provider = ConsoleCodeProvider;
    let stored = auth::authorize(&secret, &mut provider, &http).await?;

    stored.save(&token_path)?;
    println!("Authorization complete. Token saved to {}.", token_path.display());

    Ok(())
}
