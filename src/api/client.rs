use reqwest::Client;

use crate::error::TransferError;

const DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";

pub struct DriveClient {
    pub base_url: String,
    pub token: String,
    pub http: Client,
}

impl DriveClient {
    /// Build a client around an already-obtained access token. No request
    /// timeout is set; each call blocks until the API answers.
    pub fn new(access_token: &str) -> Result<Self, TransferError> {
        let http = Client::builder().build()?;
        Ok(Self {
            base_url: DRIVE_API_BASE.to_string(),
            token: access_token.to_string(),
            http,
        })
    }
}

/// Minimal percent-encoding for query parameter values.
pub(crate) fn query_escape(s: &str) -> String {
    s.replace('%', "%25")
        .replace(' ', "%20")
        .replace('"', "%22")
        .replace('#', "%23")
        .replace('&', "%26")
        .replace('+', "%2B")
}
