use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::{Client, Url};
use tokio::{sync::Mutex, time::Instant};

use crate::{
    config::SpotifyConfig,
    error::{ImportError, Result},
    info,
    server::{self, SharedSession},
    spotify::check_status,
    types::{AuthSession, Token, TokenResponse},
    utils, warning,
};

/// Runs the interactive authorization-code flow and returns a fresh token.
///
/// The flow:
/// 1. Generates a PKCE verifier/challenge pair and a random `state`
/// 2. Binds the local callback server on the redirect address
/// 3. Opens the authorization URL in the user's browser
/// 4. Waits (up to the configured timeout) for the callback to deliver a code
/// 5. Exchanges the code, authenticating with the client secret
///
/// # Errors
///
/// Every failure, including a denied consent or a timeout, is reported as
/// [`ImportError::RemoteService`] except for binding the callback port, which
/// surfaces as an I/O error.
pub async fn authorize(http: &Client, config: &SpotifyConfig) -> Result<Token> {
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);
    let state = utils::generate_state();

    let shared_state: SharedSession = Arc::new(Mutex::new(AuthSession {
        state: state.clone(),
        code: None,
        error: None,
    }));

    let listener = server::bind(&config.callback_addr).await?;
    let server_state = Arc::clone(&shared_state);
    let server = tokio::spawn(async move {
        if let Err(e) = server::start_api_server(listener, server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    let auth_url = authorize_url(config, &code_challenge, &state)?;
    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    } else {
        info!("Waiting for Spotify authorization in your browser...");
    }

    let code = wait_for_code(&shared_state, config.auth_timeout).await;
    server.abort();

    exchange_code(http, config, &code?, &code_verifier).await
}

/// Builds the URL of Spotify's consent page.
pub fn authorize_url(config: &SpotifyConfig, code_challenge: &str, state: &str) -> Result<Url> {
    Url::parse_with_params(
        &config.auth_url,
        &[
            ("client_id", config.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("code_challenge_method", "S256"),
            ("code_challenge", code_challenge),
            ("state", state),
            ("scope", config.scope.as_str()),
        ],
    )
    .map_err(|e| ImportError::Configuration(format!("Invalid authorization URL: {}", e)))
}

/// Polls the shared session until the callback stored a code or an error.
pub async fn wait_for_code(shared_state: &SharedSession, max_wait: Duration) -> Result<String> {
    let start = Instant::now();

    while start.elapsed() < max_wait {
        {
            let session = shared_state.lock().await;
            if let Some(error) = &session.error {
                let message = format!("authorization failed: {}", error);
                return Err(ImportError::RemoteService(message));
            }
            if let Some(code) = &session.code {
                return Ok(code.clone());
            }
        }
        tokio::time::sleep(Duration::from_millis(500)).await;
    }

    Err(ImportError::RemoteService(
        "authorization timed out".to_string(),
    ))
}

/// Exchanges an authorization code for an access token.
pub async fn exchange_code(
    http: &Client,
    config: &SpotifyConfig,
    code: &str,
    verifier: &str,
) -> Result<Token> {
    let response = http
        .post(&config.token_url)
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("code_verifier", verifier),
        ])
        .send()
        .await?;

    let json: TokenResponse = check_status(response).await?.json().await?;
    let refresh_token = json.refresh_token.clone().ok_or_else(|| {
        ImportError::RemoteService("token response carried no refresh token".to_string())
    })?;

    Ok(token_from_response(json, refresh_token))
}

/// Refreshes an expired access token.
///
/// Spotify may or may not rotate the refresh token; when it doesn't, the
/// previous one is kept.
pub async fn refresh_token(
    http: &Client,
    config: &SpotifyConfig,
    current: &Token,
) -> Result<Token> {
    let response = http
        .post(&config.token_url)
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", current.refresh_token.as_str()),
        ])
        .send()
        .await?;

    let json: TokenResponse = check_status(response).await?.json().await?;
    let refresh_token = json
        .refresh_token
        .clone()
        .unwrap_or_else(|| current.refresh_token.clone());

    let mut token = token_from_response(json, refresh_token);
    if token.scope.is_empty() {
        token.scope = current.scope.clone();
    }
    Ok(token)
}

fn token_from_response(json: TokenResponse, refresh_token: String) -> Token {
    Token {
        access_token: json.access_token,
        refresh_token,
        scope: json.scope.unwrap_or_default(),
        expires_in: json.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    }
}
