use std::collections::HashMap;

use axum::{Extension, extract::Query, response::Html};

use crate::{server::SharedSession, warning};

/// Receives the redirect from Spotify's authorization page.
///
/// Only records the outcome in the shared session; the authorization flow
/// picks it up and performs the token exchange itself.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<SharedSession>,
) -> Html<&'static str> {
    let mut session = shared_state.lock().await;

    if let Some(error) = params.get("error") {
        warning!("Authorization was denied: {}", error);
        session.error = Some(error.clone());
        return Html("<h4>Login failed.</h4>");
    }

    if params.get("state") != Some(&session.state) {
        session.error = Some("state mismatch in authorization callback".to_string());
        return Html("<h4>Login failed: state mismatch.</h4>");
    }

    match params.get("code") {
        Some(code) => {
            session.code = Some(code.clone());
            Html("<h2>Authentication successful.</h2><p>Close browser window.</p>")
        }
        None => Html("<h4>Missing authorization code.</h4>"),
    }
}
