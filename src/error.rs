use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error(
        "client secret file not found at {path}. Download it from the API console, or point DRIVE_CLIENT_SECRET_FILE at it."
    )]
    MissingClientSecret { path: PathBuf },

    #[error("no stored token at {path}. Run `drive-ownership-transfer auth` first.")]
    MissingToken { path: PathBuf },

    #[error("malformed JSON in {path}: {source}")]
    MalformedJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to read or write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read authorization code from console: {0}")]
    CodeInput(#[from] std::io::Error),

    #[error("authorization code exchange failed (HTTP {status}): {body}")]
    AuthExchange { status: StatusCode, body: String },

    #[error(
        "token response did not include a refresh token; revoke the app's access and re-run auth"
    )]
    MissingRefreshToken,

    #[error("file {file_id} is missing or not accessible (HTTP {status}): {body}")]
    FileNotFoundOrForbidden {
        file_id: String,
        status: StatusCode,
        body: String,
    },

    #[error("Drive API request failed (HTTP {status}): {body}")]
    Api { status: StatusCode, body: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}
