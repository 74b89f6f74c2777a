//! Tubestream - 音频流解析服务
//!
//! 架构设计: Hexagonal Architecture
//!
//! 应用层 (application/):
//! - Ports: 端口定义（ExtractorPort）
//! - Queries: 查询处理器（GetStreamsHandler）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Adapters: yt-dlp Extractor Client

pub mod application;
pub mod config;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
