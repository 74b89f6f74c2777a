//! Tubestream - 音频流解析服务
//!
//! 将视频 ID 转交给外部提取器（yt-dlp），过滤出带音频编码的格式列表，
//! 以 JSON 形式返回。

use std::sync::Arc;

use tubestream::config::{load_config, print_config};
use tubestream::infrastructure::adapters::{YtDlpConfig, YtDlpExtractor};
use tubestream::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!("{},tower_http=debug", config.log.level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt().with_env_filter(env_filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Tubestream - 音频流解析服务");
    print_config(&config);

    // 创建 yt-dlp 提取器适配器
    let ytdlp_config = YtDlpConfig {
        binary: config.extractor.binary.clone(),
        format: config.extractor.format.clone(),
    };
    let extractor = Arc::new(YtDlpExtractor::new(ytdlp_config));

    // 启动时探测 yt-dlp 是否可用（不可用时仅告警，不中断启动）
    extractor.check_available().await;

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(extractor, config.extractor.format.clone());

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
