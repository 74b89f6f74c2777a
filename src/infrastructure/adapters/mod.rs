//! Infrastructure Adapters - 端口的具体实现

pub mod extractor;

pub use extractor::{FakeExtractor, YtDlpConfig, YtDlpExtractor};
