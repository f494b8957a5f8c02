use axum::extract::Request;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// Extension type to store the verified identity in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
}

/// Middleware that validates bearer tokens and adds user info to request extensions
///
/// Token decoding alone is not enough: the decoded pair is checked against
/// the stored user record, so a token for a deleted or since-renamed account
/// stops working the moment the record changes.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    // Extract token from Authorization header
    let token = extract_token_from_header(req.headers())?;

    let identity = resolve_identity(&state, token).await.ok_or_else(|| {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid token"
            })),
        )
            .into_response()
    })?;

    // Add authenticated user info to request extensions
    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

/// Resolve the caller's identity from request headers, if any.
///
/// For routes that are readable anonymously but behave differently for an
/// authenticated caller (private playlist reads). Any header or token
/// problem simply yields `None`.
pub async fn identify(state: &AppState, headers: &HeaderMap) -> Option<AuthenticatedUser> {
    let token = extract_token_from_header(headers).ok()?;
    resolve_identity(state, token).await
}

/// Decode a token and run the stored-record integrity check.
///
/// Every failure collapses to `None`; the reason is logged, never surfaced.
async fn resolve_identity(state: &AppState, token: &str) -> Option<AuthenticatedUser> {
    let payload = match state.authenticator.verify_token(token) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!("Token validation failed: {}", e);
            return None;
        }
    };

    let user_id = match UserId::from_string(payload.user_id()) {
        Ok(user_id) => user_id,
        Err(e) => {
            tracing::warn!("Failed to parse user ID from token: {}", e);
            return None;
        }
    };

    // Integrity check: the user must still exist and the stored username
    // must match the one embedded at issuance time.
    let user = match state.user_service.get_user(&user_id).await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!("Token refers to an unknown user: {}", e);
            return None;
        }
    };

    if user.username.as_str() != payload.username() {
        tracing::warn!(
            user_id = %user_id,
            "Token username does not match the stored record"
        );
        return None;
    }

    Some(AuthenticatedUser {
        user_id,
        username: payload.username().to_string(),
    })
}

fn extract_token_from_header(headers: &HeaderMap) -> Result<&str, Response> {
    let auth_header = headers.get(http::header::AUTHORIZATION).ok_or_else(|| {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Missing Authorization header"
            })),
        )
            .into_response()
    })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid Authorization header"
            })),
        )
            .into_response()
    })?;

    if !auth_str.starts_with("Bearer ") {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid Authorization header format. Expected: Bearer <token>"
            })),
        )
            .into_response());
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}
