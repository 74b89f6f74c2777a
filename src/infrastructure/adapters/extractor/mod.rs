//! Extractor Adapters - ExtractorPort 的具体实现

mod fake;
mod ytdlp;

pub use fake::FakeExtractor;
pub use ytdlp::{YtDlpConfig, YtDlpExtractor};
