use reqwest::StatusCode;

use crate::api::client::DriveClient;
use crate::error::TransferError;
use crate::models::file::DriveFile;

impl DriveClient {
    /// Fetch the file's display name and owner list.
    pub async fn get_file(&self, file_id: &str) -> Result<DriveFile, TransferError> {
        let url = format!("{}/files/{}?fields=name,owners", self.base_url, file_id);

        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        if is_missing_or_forbidden(status) {
            let body = resp.text().await.unwrap_or_default();
            return Err(TransferError::FileNotFoundOrForbidden {
                file_id: file_id.to_string(),
                status,
                body,
            });
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TransferError::Api { status, body });
        }

        Ok(resp.json().await?)
    }
}

/// A nonexistent file and one the caller cannot see are indistinguishable
/// to the API consumer; both end the run the same way.
fn is_missing_or_forbidden(status: StatusCode) -> bool {
    status == StatusCode::NOT_FOUND || status == StatusCode::FORBIDDEN
}
