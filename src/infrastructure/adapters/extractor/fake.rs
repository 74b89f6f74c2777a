//! Fake Extractor Client - 测试用提取器
//!
//! 实现 ExtractorPort trait，返回预设结果，不依赖外部 yt-dlp

use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{ExtractError, ExtractOptions, ExtractorPort, VideoInfo};

/// 预设响应
#[derive(Debug, Clone)]
enum FakeResponse {
    Success(VideoInfo),
    NotFound(String),
    Failure(String),
}

/// Fake 提取器
///
/// 返回固定结果，并记录最近一次请求的 URL
pub struct FakeExtractor {
    response: FakeResponse,
    last_url: Mutex<Option<String>>,
}

impl FakeExtractor {
    /// 始终成功，返回给定的视频信息
    pub fn succeeding(info: VideoInfo) -> Self {
        Self {
            response: FakeResponse::Success(info),
            last_url: Mutex::new(None),
        }
    }

    /// 始终返回"视频无法解析"
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            response: FakeResponse::NotFound(message.into()),
            last_url: Mutex::new(None),
        }
    }

    /// 始终返回非解析类失败
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: FakeResponse::Failure(message.into()),
            last_url: Mutex::new(None),
        }
    }

    /// 最近一次 extract 调用的 URL
    pub fn last_url(&self) -> Option<String> {
        self.last_url.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExtractorPort for FakeExtractor {
    async fn extract(
        &self,
        url: &str,
        _options: &ExtractOptions,
    ) -> Result<VideoInfo, ExtractError> {
        *self.last_url.lock().unwrap() = Some(url.to_string());

        match &self.response {
            FakeResponse::Success(info) => Ok(info.clone()),
            FakeResponse::NotFound(msg) => Err(ExtractError::NotFound(msg.clone())),
            FakeResponse::Failure(msg) => Err(ExtractError::ProcessError(msg.clone())),
        }
    }
}
