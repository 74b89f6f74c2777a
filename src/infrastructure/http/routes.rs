//! HTTP Routes
//!
//! API Endpoints:
//! - /                    GET   服务描述（存活确认）
//! - /streams/:video_id   GET   解析视频的音频流列表

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::root))
        .route("/streams/:video_id", get(handlers::get_streams))
}
