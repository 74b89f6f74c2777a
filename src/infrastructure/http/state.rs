//! Application State

use std::sync::Arc;

use crate::application::ports::ExtractorPort;
use crate::application::queries::GetStreamsHandler;

/// 应用状态
pub struct AppState {
    pub extractor: Arc<dyn ExtractorPort>,
    pub get_streams_handler: GetStreamsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(extractor: Arc<dyn ExtractorPort>, format_preference: String) -> Self {
        Self {
            extractor: extractor.clone(),
            get_streams_handler: GetStreamsHandler::new(extractor, format_preference),
        }
    }
}
