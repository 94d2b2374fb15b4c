use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tokio::{net::TcpListener, sync::Mutex};

use crate::{api, error::Result, types::AuthSession};

pub type SharedSession = Arc<Mutex<AuthSession>>;

pub fn router(state: SharedSession) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(state)))
}

/// Binds the callback listener up front so a busy port fails the flow
/// immediately instead of timing out.
pub async fn bind(addr: &str) -> Result<TcpListener> {
    Ok(TcpListener::bind(addr).await?)
}

pub async fn start_api_server(listener: TcpListener, state: SharedSession) -> Result<()> {
    axum::serve(listener, router(state)).await?;
    Ok(())
}
