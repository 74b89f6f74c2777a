//! HTTP Error Handling
//!
//! 对外统一为 HTTP 状态码 + `{detail}` 响应体；
//! 底层原因只记录日志，不暴露给调用方

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ports::ExtractError;

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// 对外的通用错误文案
const NOT_FOUND_DETAIL: &str = "Video not found or extraction failed";
const INTERNAL_DETAIL: &str = "Stream extraction failed";

/// API 错误
///
/// 变体携带的字符串是内部原因，仅用于日志
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::NotFound(cause) => {
                tracing::warn!(cause = %cause, "Video resolution failed");
                (StatusCode::NOT_FOUND, NOT_FOUND_DETAIL)
            }
            ApiError::Internal(cause) => {
                tracing::error!(cause = %cause, "Stream extraction failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_DETAIL)
            }
        };

        (
            status,
            Json(ErrorDetail {
                detail: detail.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<ExtractError> for ApiError {
    fn from(e: ExtractError) -> Self {
        match e {
            ExtractError::NotFound(cause) => ApiError::NotFound(cause),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
