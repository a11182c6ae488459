use std::io::{self, BufRead, Write};

use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use crate::api::client::query_escape;
use crate::credentials::{ClientSecret, StoredToken};
use crate::error::TransferError;

const AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Full read/write access to the file store. Ownership transfers need it.
pub const DRIVE_SCOPE: &str = "https://www.googleapis.com/auth/drive";

/// Authorization lifecycle. The interactive flow walks all three states;
/// loading a stored token jumps straight to `Authenticated`.
#[derive(Debug)]
pub enum AuthState {
    Unauthenticated,
    AwaitingUserCode { auth_url: String },
    Authenticated(StoredToken),
}

/// Supplies the one-time authorization code for the consent URL.
pub trait CodeProvider {
    fn obtain_code(&mut self, auth_url: &str) -> Result<String, TransferError>;
}

/// Prints the consent URL and blocks on a single line from stdin.
pub struct ConsoleCodeProvider;

impl CodeProvider for ConsoleCodeProvider {
    fn obtain_code(&mut self, auth_url: &str) -> Result<String, TransferError> {
        println!("Open this URL in your browser and grant access:");
        println!();
        println!("  {}", auth_url);
        println!();
        print!("Paste the authorization code here: ");
        io::stdout().flush()?;

        let mut code = String::new();
        io::stdin().lock().read_line(&mut code)?;
        Ok(code.trim().to_string())
    }
}

pub fn begin(secret: &ClientSecret) -> AuthState {
    AuthState::AwaitingUserCode {
        auth_url: authorization_url(secret),
    }
}

/// Drive the interactive flow to completion. Any failure aborts; there is
/// no retry.
pub async fn authorize(
    secret: &ClientSecret,
    provider: &mut dyn CodeProvider,
    http: &Client,
) -> Result<StoredToken, TransferError> {
    let mut state = AuthState::Unauthenticated;
    loop {
        state = match state {
            AuthState::Unauthenticated => begin(secret),
            AuthState::AwaitingUserCode { auth_url } => {
                let code = provider.obtain_code(&auth_url)?;
                AuthState::Authenticated(exchange_code(http, secret, &code).await?)
            }
            AuthState::Authenticated(token) => return Ok(token),
        };
    }
}

/// Consent URL for the installed-app flow. `access_type=offline` and
/// `prompt=consent` make the token endpoint return a refresh token.
pub fn authorization_url(secret: &ClientSecret) -> String {
    format!(
        "{}?client_id={}&redirect_uri={}&response_type=code&scope={}&access_type=offline&prompt=consent",
        AUTH_URL,
        query_escape(&secret.client_id),
        query_escape(secret.redirect_uri()),
        query_escape(DRIVE_SCOPE)
    )
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    expires_in: i64,
    token_type: String,
}

/// Exchange an authorization code for a token record.
pub async fn exchange_code(
    http: &Client,
    secret: &ClientSecret,
    code: &str,
) -> Result<StoredToken, TransferError> {
    let resp = http
        .post(TOKEN_URL)
        .form(&[
            ("code", code),
            ("client_id", secret.client_id.as_str()),
            ("client_secret", secret.client_secret.as_str()),
            ("redirect_uri", secret.redirect_uri()),
            ("grant_type", "authorization_code"),
        ])
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(TransferError::AuthExchange { status, body });
    }

    let token: TokenResponse = resp.json().await?;
    let refresh_token = token
        .refresh_token
        .ok_or(TransferError::MissingRefreshToken)?;

    Ok(StoredToken {
        access_token: token.access_token,
        refresh_token,
        expiry: Utc::now() + chrono::Duration::seconds(token.expires_in),
        token_type: token.token_type,
    })
}

#[cfg(test)]
mod tests {
    use super::{AuthState, authorization_url, begin};
    use crate::credentials::ClientSecret;

    fn sample_secret() -> ClientSecret {
        ClientSecret {
            client_id: "id-123.apps.example.com".to_string(),
            client_secret: "s3cret".to_string(),
            redirect_uris: vec!["urn:ietf:wg:oauth:2.0:oob".to_string()],
        }
    }

    #[test]
    fn begin_awaits_a_user_code() {
        assert!(matches!(
            begin(&sample_secret()),
            AuthState::AwaitingUserCode { .. }
        ));
    }

    #[test]
    fn consent_url_carries_client_scope_and_offline_access() {
        let url = authorization_url(&sample_secret());

        assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
        assert!(url.contains("client_id=id-123.apps.example.com"));
        assert!(url.contains("redirect_uri=urn:ietf:wg:oauth:2.0:oob"));
        assert!(url.contains("scope=https://www.googleapis.com/auth/drive"));
        assert!(url.contains("access_type=offline"));
        assert!(url.contains("prompt=consent"));
    }
}
