//! Root Handler
//!
//! 服务描述端点，仅用于存活确认

use axum::Json;

use crate::infrastructure::http::dto::RootResponse;

/// Root endpoint - 固定的服务描述
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "YouTube Stream Extraction API",
        status: "Running",
        version: env!("CARGO_PKG_VERSION"),
    })
}
