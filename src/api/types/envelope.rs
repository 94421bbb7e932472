//! Response envelope
//!
//! Every endpoint answers with the same shape:
//! `{status: bool, message: "success"|"fail", data|error: ...}`.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub status: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(data: T) -> Json<Self> {
        Json(Self {
            status: true,
            message: "success",
            data: Some(data),
            error: None,
        })
    }
}

impl Envelope<()> {
    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            status: false,
            message: "fail",
            data: None,
            error: Some(error.into()),
        }
    }
}
