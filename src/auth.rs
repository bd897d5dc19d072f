use crate::{error::AppError, handlers::calc::AppState, logging::MaskedSecret};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use subtle::ConstantTimeEq;

/// Header carrying the shared secret
pub const API_KEY_HEADER: &str = "x-api-key";

/// Authentication middleware
/// Rejects the request with 403 unless `x-api-key` equals the configured token
pub async fn api_key_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let provided = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match provided {
        Some(key) if token_matches(key, &state.config.auth.api_token) => Ok(next.run(req).await),
        Some(key) => {
            tracing::warn!(api_key = %MaskedSecret::new(key), "Rejected request with invalid API key");
            Err(AppError::Forbidden)
        }
        None => {
            tracing::warn!("Rejected request without {} header", API_KEY_HEADER);
            Err(AppError::Forbidden)
        }
    }
}

/// Exact byte equality, compared in constant time
fn token_matches(provided: &str, expected: &str) -> bool {
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_matches_exact() {
        assert!(token_matches("secret-token", "secret-token"));
    }

    #[test]
    fn test_token_mismatch() {
        assert!(!token_matches("secret-tokeN", "secret-token"));
        assert!(!token_matches("secret", "secret-token"));
        assert!(!token_matches("secret-token ", "secret-token"));
        assert!(!token_matches("", "secret-token"));
    }

    #[test]
    fn test_token_is_case_sensitive() {
        assert!(!token_matches("SECRET", "secret"));
    }
}
