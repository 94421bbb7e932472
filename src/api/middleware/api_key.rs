//! API key extractor
//!
//! Reads the `X-API-KEY` header and verifies it against the key store.
//! The three rejection cases carry distinct messages for observability
//! but share the 401 category: header absent, key malformed, key
//! unverifiable.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
};

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::api_key::ApiKey;
use crate::domain::DomainError;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Extractor that requires a valid API key
#[derive(Debug, Clone)]
pub struct RequireApiKey(pub ApiKey);

impl FromRequestParts<AppState> for RequireApiKey {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(API_KEY_HEADER)
            .ok_or_else(|| ApiError::unauthorized("API key not provided"))?
            .to_str()
            .map_err(|_| ApiError::unauthorized("Malformed API key"))?
            .trim();

        let api_key = state.api_key_service.verify(raw).await.map_err(|e| match e {
            DomainError::Credential { message } => ApiError::unauthorized(message),
            other => other.into(),
        })?;

        Ok(RequireApiKey(api_key))
    }
}
