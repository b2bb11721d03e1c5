// ============================
// crates/backend-lib/src/http_router.rs
// ============================
//! HTTP router and request handlers.
use crate::error::AppError;
use crate::metrics::{ACCOUNT_REGISTERED, LOGIN_REJECTED, LOGIN_SUCCEEDED, SIGNUP_REJECTED};
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use gatekeeper_common::{LoginInput, RegistrationInput, TokenResponse};
use metrics::counter;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Create the HTTP router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

/// Handler for account registration
async fn signup(
    State(state): State<Arc<AppState>>,
    Json(input): Json<RegistrationInput>,
) -> Result<impl IntoResponse, AppError> {
    match state.accounts.register(input).await {
        Ok(token) => {
            counter!(ACCOUNT_REGISTERED).increment(1);
            Ok((StatusCode::CREATED, Json(TokenResponse::bearer(token))))
        },
        Err(e) => {
            counter!(SIGNUP_REJECTED).increment(1);
            Err(e)
        },
    }
}

/// Handler for login
async fn login(
    State(state): State<Arc<AppState>>,
    Json(input): Json<LoginInput>,
) -> Result<impl IntoResponse, AppError> {
    match state.accounts.authenticate(input).await {
        Ok(token) => {
            counter!(LOGIN_SUCCEEDED).increment(1);
            Ok((StatusCode::OK, Json(TokenResponse::bearer(token))))
        },
        Err(e) => {
            counter!(LOGIN_REJECTED).increment(1);
            Err(e)
        },
    }
}
