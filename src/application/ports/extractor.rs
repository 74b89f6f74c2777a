//! Extractor Port - 媒体提取引擎抽象
//!
//! 定义媒体提取的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// 提取错误
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Video not found: {0}")]
    NotFound(String),

    #[error("Extractor process error: {0}")]
    ProcessError(String),

    #[error("Invalid extractor output: {0}")]
    InvalidOutput(String),

    #[error("Extractor unavailable: {0}")]
    Unavailable(String),
}

/// 提取选项
///
/// 传递给外部提取器的调用选项
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// 抑制控制台输出
    pub quiet: bool,
    /// 抑制警告输出
    pub no_warnings: bool,
    /// 跳过逐格式深度解析
    pub extract_flat: bool,
    /// 格式偏好提示（如 "bestaudio/best"）
    pub format: Option<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            quiet: true,
            no_warnings: true,
            extract_flat: false,
            format: None,
        }
    }
}

impl ExtractOptions {
    /// 带格式偏好提示的静默选项
    pub fn with_format(format: impl Into<String>) -> Self {
        Self {
            format: Some(format.into()),
            ..Default::default()
        }
    }
}

/// 视频元数据与可用格式列表（提取器输出）
#[derive(Debug, Clone, Default)]
pub struct VideoInfo {
    /// 视频标题
    pub title: Option<String>,
    /// 上传者
    pub uploader: Option<String>,
    /// 缩略图 URL
    pub thumbnail: Option<String>,
    /// 时长（秒）
    pub duration: Option<u64>,
    /// 可用格式列表（保持提取器原始顺序）
    pub formats: Vec<FormatEntry>,
}

/// 单个可交付格式
#[derive(Debug, Clone, Default)]
pub struct FormatEntry {
    /// 格式标识符
    pub format_id: String,
    /// 容器扩展名
    pub ext: String,
    /// 音频编码，"none" 表示无音频轨
    pub acodec: Option<String>,
    /// 平均比特率，0 表示未知
    pub abr: f64,
    /// 文件大小（字节）
    pub filesize: Option<u64>,
    /// 直接获取 URL，可能为空
    pub url: String,
}

/// Extractor Port
///
/// 外部媒体提取器的抽象接口
#[async_trait]
pub trait ExtractorPort: Send + Sync {
    /// 解析视频 URL
    ///
    /// 调用外部提取器，返回视频元数据与可用格式列表
    async fn extract(&self, url: &str, options: &ExtractOptions)
        -> Result<VideoInfo, ExtractError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ExtractOptions::default();
        assert!(options.quiet);
        assert!(options.no_warnings);
        assert!(!options.extract_flat);
        assert!(options.format.is_none());
    }

    #[test]
    fn test_options_with_format() {
        let options = ExtractOptions::with_format("bestaudio/best");
        assert!(options.quiet);
        assert_eq!(options.format.as_deref(), Some("bestaudio/best"));
    }
}
