use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TransferError;

/// Overrides the default client secret location.
pub const CLIENT_SECRET_ENV: &str = "DRIVE_CLIENT_SECRET_FILE";

const APP_DIR: &str = "drive-ownership-transfer";
const OOB_REDIRECT_URI: &str = "urn:ietf:wg:oauth:2.0:oob";

/// Token record persisted after a successful authorization.
///
/// `expiry` is recorded for operator inspection but is not checked before
/// use; an expired access token is sent as-is and the API's rejection
/// surfaces as a request failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredToken {
    pub access_token: String,
    pub refresh_token: String,
    pub expiry: DateTime<Utc>,
    pub token_type: String,
}

impl StoredToken {
    pub fn load(path: &Path) -> Result<Self, TransferError> {
        if !path.exists() {
            return Err(TransferError::MissingToken {
                path: path.to_path_buf(),
            });
        }
        let contents = read_file(path)?;
        serde_json::from_str(&contents).map_err(|source| TransferError::MalformedJson {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), TransferError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| TransferError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| TransferError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Operator-provisioned OAuth client, read-only.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSecret {
    pub client_id: String,
    pub client_secret: String,
    #[serde(default)]
    pub redirect_uris: Vec<String>,
}

/// The API console download wraps the secret under an `installed` key.
#[derive(Deserialize)]
struct InstalledClientSecret {
    installed: ClientSecret,
}

impl ClientSecret {
    /// Load from either the `installed`-wrapped console format or a flat
    /// object with the same fields.
    pub fn load(path: &Path) -> Result<Self, TransferError> {
        if !path.exists() {
            return Err(TransferError::MissingClientSecret {
                path: path.to_path_buf(),
            });
        }
        let contents = read_file(path)?;
        serde_json::from_str::<InstalledClientSecret>(&contents)
            .map(|wrapped| wrapped.installed)
            .or_else(|_| serde_json::from_str::<ClientSecret>(&contents))
            .map_err(|source| TransferError::MalformedJson {
                path: path.to_path_buf(),
                source,
            })
    }

    /// First configured redirect URI, falling back to the out-of-band
    /// console flow.
    pub fn redirect_uri(&self) -> &str {
        self.redirect_uris
            .first()
            .map(String::as_str)
            .unwrap_or(OOB_REDIRECT_URI)
    }
}

pub fn default_client_secret_path() -> PathBuf {
    if let Ok(path) = env::var(CLIENT_SECRET_ENV) {
        return PathBuf::from(path);
    }
    config_root().join("client_secret.json")
}

pub fn default_token_path() -> PathBuf {
    config_root().join("token.json")
}

fn config_root() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

fn read_file(path: &Path) -> Result<String, TransferError> {
    fs::read_to_string(path).map_err(|source| TransferError::Io {
        path: path.to_path_buf(),
        source,
    })
}
