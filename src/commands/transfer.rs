use std::path::PathBuf;

use anyhow::Result;

use crate::api::client::DriveClient;
use crate::api::permissions::{ReconcileAction, reconcile};
use crate::credentials::{self, StoredToken};

pub async fn run(file_id: &str, new_owner: &str, token: Option<PathBuf>) -> Result<()> {
    // 1. Load the stored token. Nothing touches the network without one.
    let token_path = token.unwrap_or_else(credentials::default_token_path);
    let stored = StoredToken::load(&token_path)?;

    let client = DriveClient::new(&stored.access_token)?;

    // 2. Fetch file metadata, failing fast on a bad or inaccessible ID.
    let file = client.get_file(file_id).await?;
    println!("File: {} (ID: {})", file.name, file_id);
    println!("Current owner: {}", file.owner_email().unwrap_or("unknown"));

    // 3. List the existing grants.
    let grants = client.list_permissions(file_id).await?;

    // 4. One create-or-update call, never both.
    match reconcile(&grants, new_owner) {
        ReconcileAction::Update(grant) => {
            client.update_permission(file_id, &grant.id).await?;
            println!(
                "Updated the existing {} grant for {} to writer with pending ownership.",
                grant.role, new_owner
            );
        }
        ReconcileAction::Create => {
            client.create_permission(file_id, new_owner, &file.name).await?;
            println!(
                "Granted {} writer access with pending ownership and sent a notification email.",
                new_owner
            );
        }
    }

    // 5. Ownership only changes once the invitee accepts.
    println!(
        "Transfer initiated. {} must accept it before ownership changes.",
        new_owner
    );

    Ok(())
}
