//! Application Layer
//!
//! - Ports: 出站端口定义（ExtractorPort）
//! - Queries: 查询处理器

pub mod ports;
pub mod queries;

pub use ports::{ExtractError, ExtractOptions, ExtractorPort, FormatEntry, VideoInfo};
pub use queries::{AudioStream, GetStreams, GetStreamsHandler, StreamCollection};
