//! Request extractors for authentication

mod api_key;
mod user_auth;

pub use api_key::{RequireApiKey, API_KEY_HEADER};
pub use user_auth::{RequireAdmin, RequireUser};
