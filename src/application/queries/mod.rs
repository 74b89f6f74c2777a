//! Application Queries - 查询处理器

mod stream_queries;

pub use stream_queries::{AudioStream, GetStreams, GetStreamsHandler, StreamCollection};
