//! Streams Handler
//!
//! 解析视频的音频流列表

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::application::queries::GetStreams;
use crate::infrastructure::http::dto::StreamsResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 解析音频流
///
/// `video_id` 是不透明的路径段，不做格式校验；
/// 提取失败时返回 404/500 + 通用 detail 文案
pub async fn get_streams(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
) -> Result<Json<StreamsResponse>, ApiError> {
    let collection = state
        .get_streams_handler
        .handle(GetStreams { video_id })
        .await?;

    Ok(Json(collection.into()))
}
