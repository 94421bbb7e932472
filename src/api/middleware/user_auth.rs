//! Token authentication extractors

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::user::User;

/// Extractor that requires an authenticated user
#[derive(Debug, Clone)]
pub struct RequireUser(pub User);

/// Extractor that additionally requires the admin role
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub User);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(parts)?;

        let user_id = state
            .token_service
            .resolve(token)
            .await?
            .ok_or_else(|| ApiError::unauthorized("Invalid token"))?;

        let user = state
            .user_service
            .get(user_id)
            .await?
            .ok_or_else(|| ApiError::unauthorized("Invalid token"))?;

        Ok(RequireUser(user))
    }
}

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let RequireUser(user) = RequireUser::from_request_parts(parts, state).await?;

        if !user.is_admin() {
            return Err(ApiError::forbidden(
                "You do not have permission to perform this action",
            ));
        }

        Ok(RequireAdmin(user))
    }
}

/// Pull the bearer token out of the Authorization header. Accepts the
/// `Token <t>` scheme and plain `Bearer <t>`.
pub(crate) fn extract_token(parts: &Parts) -> Result<&str, ApiError> {
    let value = parts
        .headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthorized("Authentication credentials were not provided"))?
        .to_str()
        .map_err(|_| ApiError::unauthorized("Invalid Authorization header encoding"))?;

    value
        .strip_prefix("Token ")
        .or_else(|| value.strip_prefix("Bearer "))
        .map(str::trim)
        .ok_or_else(|| ApiError::unauthorized("Invalid Authorization header"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, Request};

    fn parts_with(headers: HeaderMap) -> Parts {
        let mut request = Request::new(());
        *request.headers_mut() = headers;
        request.into_parts().0
    }

    #[test]
    fn test_token_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Token abc123".parse().unwrap());

        let parts = parts_with(headers);
        assert_eq!(extract_token(&parts).unwrap(), "abc123");
    }

    #[test]
    fn test_bearer_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer abc123".parse().unwrap());

        let parts = parts_with(headers);
        assert_eq!(extract_token(&parts).unwrap(), "abc123");
    }

    #[test]
    fn test_missing_header() {
        let parts = parts_with(HeaderMap::new());
        let err = extract_token(&parts).unwrap_err();
        assert_eq!(err.error, "Authentication credentials were not provided");
    }

    #[test]
    fn test_unknown_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Basic dXNlcg==".parse().unwrap());

        let parts = parts_with(headers);
        assert!(extract_token(&parts).is_err());
    }
}
