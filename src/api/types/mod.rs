//! Wire types shared across endpoints

mod envelope;
mod error;

pub use envelope::Envelope;
pub use error::ApiError;

/// Standard handler result: a success envelope or a failure envelope
pub type ApiResult<T> = Result<axum::Json<Envelope<T>>, ApiError>;
