//! yt-dlp Extractor Client - 调用外部 yt-dlp 可执行文件
//!
//! 实现 ExtractorPort trait，通过子进程调用 yt-dlp：
//! `yt-dlp --dump-json --no-download [选项] <url>`
//! stdout 为单个 JSON 对象，包含顶层元数据与 formats 列表

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::application::ports::{
    ExtractError, ExtractOptions, ExtractorPort, FormatEntry, VideoInfo,
};

/// stderr 中表示"视频无法解析"的标记
///
/// 命中任一标记的失败归类为 NotFound，其余归类为 ProcessError
const NOT_FOUND_MARKERS: &[&str] = &[
    "video unavailable",
    "this video is not available",
    "content isn't available",
    "private video",
    "has been removed",
    "does not exist",
    "incomplete youtube id",
    "is not a valid url",
    "unable to extract video",
    "404",
];

/// yt-dlp 客户端配置
#[derive(Debug, Clone)]
pub struct YtDlpConfig {
    /// 可执行文件名称或路径
    pub binary: String,
    /// 选项未指定时的格式偏好提示
    pub format: String,
}

impl Default for YtDlpConfig {
    fn default() -> Self {
        Self {
            binary: "yt-dlp".to_string(),
            format: "bestaudio/best".to_string(),
        }
    }
}

/// yt-dlp 客户端
///
/// 通过子进程调用外部 yt-dlp
pub struct YtDlpExtractor {
    config: YtDlpConfig,
}

impl YtDlpExtractor {
    /// 创建新的 yt-dlp 客户端
    pub fn new(config: YtDlpConfig) -> Self {
        Self { config }
    }

    /// 使用默认配置创建客户端
    pub fn with_default_config() -> Self {
        Self::new(YtDlpConfig::default())
    }

    /// 探测 yt-dlp 是否可用（启动时调用，仅记录日志）
    pub async fn check_available(&self) -> bool {
        match Command::new(&self.config.binary)
            .arg("--version")
            .output()
            .await
        {
            Ok(output) if output.status.success() => {
                let version = String::from_utf8_lossy(&output.stdout);
                info!(binary = %self.config.binary, version = %version.trim(), "yt-dlp is available");
                true
            }
            Ok(_) => {
                warn!(binary = %self.config.binary, "yt-dlp version probe failed");
                false
            }
            Err(e) => {
                warn!(binary = %self.config.binary, error = %e, "yt-dlp not found");
                false
            }
        }
    }

    /// 将提取选项映射为 yt-dlp 命令行参数
    fn build_args(&self, url: &str, options: &ExtractOptions) -> Vec<String> {
        let mut args = vec!["--dump-json".to_string(), "--no-download".to_string()];

        if options.quiet {
            args.push("--quiet".to_string());
        }
        if options.no_warnings {
            args.push("--no-warnings".to_string());
        }
        if options.extract_flat {
            args.push("--flat-playlist".to_string());
        }

        let format = options.format.as_deref().unwrap_or(&self.config.format);
        args.push("--format".to_string());
        args.push(format.to_string());

        args.push(url.to_string());
        args
    }
}

#[async_trait]
impl ExtractorPort for YtDlpExtractor {
    async fn extract(
        &self,
        url: &str,
        options: &ExtractOptions,
    ) -> Result<VideoInfo, ExtractError> {
        let args = self.build_args(url, options);

        debug!(binary = %self.config.binary, ?args, "Invoking yt-dlp");

        let output = Command::new(&self.config.binary)
            .args(&args)
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ExtractError::Unavailable(format!(
                        "{} not found: {}",
                        self.config.binary, e
                    ))
                } else {
                    ExtractError::ProcessError(format!("Failed to spawn yt-dlp: {}", e))
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(classify_failure(&stderr));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_dump(&stdout)
    }
}

/// 将失败的 yt-dlp 运行归类为提取错误
///
/// 仅把 stderr 中带有"无法解析"标记的失败归为 NotFound，
/// 其余（网络故障、限流、输出异常）保持为 ProcessError
fn classify_failure(stderr: &str) -> ExtractError {
    let lowered = stderr.to_lowercase();
    if NOT_FOUND_MARKERS.iter().any(|m| lowered.contains(m)) {
        ExtractError::NotFound(stderr.trim().to_string())
    } else {
        ExtractError::ProcessError(stderr.trim().to_string())
    }
}

/// 解析 yt-dlp 的 JSON dump
fn parse_dump(stdout: &str) -> Result<VideoInfo, ExtractError> {
    let dump: YtDlpDump = serde_json::from_str(stdout)
        .map_err(|e| ExtractError::InvalidOutput(format!("Failed to parse yt-dlp JSON: {}", e)))?;

    Ok(VideoInfo {
        title: dump.title,
        uploader: dump.uploader,
        thumbnail: dump.thumbnail,
        duration: dump.duration.map(|d| d.max(0.0) as u64),
        formats: dump.formats.into_iter().map(FormatEntry::from).collect(),
    })
}

/// yt-dlp JSON dump 顶层字段（仅取所需部分）
#[derive(Debug, Deserialize)]
struct YtDlpDump {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    uploader: Option<String>,
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(default)]
    duration: Option<f64>,
    #[serde(default)]
    formats: Vec<YtDlpFormat>,
}

/// formats 列表中的单个条目
#[derive(Debug, Deserialize)]
struct YtDlpFormat {
    #[serde(default)]
    format_id: Option<String>,
    #[serde(default)]
    ext: Option<String>,
    #[serde(default)]
    acodec: Option<String>,
    #[serde(default)]
    abr: Option<f64>,
    #[serde(default)]
    filesize: Option<f64>,
    #[serde(default)]
    url: Option<String>,
}

impl From<YtDlpFormat> for FormatEntry {
    fn from(f: YtDlpFormat) -> Self {
        FormatEntry {
            format_id: f.format_id.unwrap_or_default(),
            ext: f.ext.unwrap_or_default(),
            acodec: f.acodec,
            abr: f.abr.unwrap_or(0.0),
            filesize: f.filesize.map(|s| s.max(0.0) as u64),
            url: f.url.unwrap_or_default(),
        }
    }
}
