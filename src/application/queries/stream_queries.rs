//! Stream Queries - 音频流查询
//!
//! 根据视频 ID 调用提取器，过滤出带音频编码的格式列表

use std::sync::Arc;

use crate::application::ports::{
    ExtractError, ExtractOptions, ExtractorPort, FormatEntry, VideoInfo,
};

/// 标题缺失时的占位值
const UNKNOWN_TITLE: &str = "Unknown Title";

/// 无音频轨的哨兵值
const NO_AUDIO_CODEC: &str = "none";

/// 音频流查询
#[derive(Debug, Clone)]
pub struct GetStreams {
    /// 不透明的视频标识符，不做格式校验
    pub video_id: String,
}

/// 查询结果：视频元数据 + 音频流列表
#[derive(Debug, Clone)]
pub struct StreamCollection {
    pub title: String,
    pub uploader: Option<String>,
    pub thumbnail: Option<String>,
    pub duration: Option<u64>,
    pub audio_streams: Vec<AudioStream>,
}

/// 单条音频流描述
#[derive(Debug, Clone)]
pub struct AudioStream {
    pub format_id: String,
    pub ext: String,
    pub abr: f64,
    pub acodec: String,
    pub filesize: Option<u64>,
    pub url: String,
}

impl StreamCollection {
    /// 从提取器输出构建查询结果
    ///
    /// 过滤规则：acodec 存在且不为 "none"，且 URL 非空。
    /// 保持提取器的原始顺序，不去重、不按质量排序。
    pub fn from_info(info: VideoInfo) -> Self {
        let audio_streams = filter_audio_formats(info.formats);

        Self {
            title: info.title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            uploader: info.uploader,
            thumbnail: info.thumbnail,
            duration: info.duration,
            audio_streams,
        }
    }
}

fn filter_audio_formats(formats: Vec<FormatEntry>) -> Vec<AudioStream> {
    formats
        .into_iter()
        .filter_map(|f| {
            let acodec = f.acodec?;
            if acodec == NO_AUDIO_CODEC || f.url.is_empty() {
                return None;
            }
            Some(AudioStream {
                format_id: f.format_id,
                ext: f.ext,
                abr: f.abr,
                acodec,
                filesize: f.filesize,
                url: f.url,
            })
        })
        .collect()
}

/// 音频流查询处理器
pub struct GetStreamsHandler {
    extractor: Arc<dyn ExtractorPort>,
    options: ExtractOptions,
}

impl GetStreamsHandler {
    pub fn new(extractor: Arc<dyn ExtractorPort>, format_preference: impl Into<String>) -> Self {
        Self {
            extractor,
            options: ExtractOptions::with_format(format_preference),
        }
    }

    /// 执行查询
    pub async fn handle(&self, query: GetStreams) -> Result<StreamCollection, ExtractError> {
        let url = canonical_video_url(&query.video_id);

        tracing::info!(video_id = %query.video_id, url = %url, "Extracting streams");

        let info = self.extractor.extract(&url, &self.options).await?;
        let collection = StreamCollection::from_info(info);

        tracing::info!(
            video_id = %query.video_id,
            title = %collection.title,
            audio_streams = collection.audio_streams.len(),
            "Extraction completed"
        );

        Ok(collection)
    }
}

/// 由视频 ID 构建规范视频 URL
fn canonical_video_url(video_id: &str) -> String {
    format!("https://youtu.be/{}", video_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::FakeExtractor;

    fn format(id: &str, acodec: Option<&str>, url: &str) -> FormatEntry {
        FormatEntry {
            format_id: id.to_string(),
            ext: "m4a".to_string(),
            acodec: acodec.map(|s| s.to_string()),
            abr: 128.0,
            filesize: Some(1024),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_canonical_video_url() {
        assert_eq!(
            canonical_video_url("dQw4w9WgXcQ"),
            "https://youtu.be/dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_filter_drops_video_only_formats() {
        let streams = filter_audio_formats(vec![
            format("137", Some("none"), "https://example.com/v"),
            format("140", Some("mp4a.40.2"), "https://example.com/a"),
        ]);

        assert_eq!(streams.len(), 1);
        assert_eq!(streams[0].format_id, "140");
        assert_eq!(streams[0].acodec, "mp4a.40.2");
    }

    #[test]
    fn test_filter_drops_missing_acodec() {
        let streams = filter_audio_formats(vec![format("18", None, "https://example.com/a")]);
        assert!(streams.is_empty());
    }

    #[test]
    fn test_filter_drops_empty_url() {
        let streams = filter_audio_formats(vec![format("140", Some("opus"), "")]);
        assert!(streams.is_empty());
    }

    #[test]
    fn test_filter_preserves_order_without_dedup() {
        let streams = filter_audio_formats(vec![
            format("139", Some("mp4a.40.5"), "https://example.com/1"),
            format("140", Some("mp4a.40.2"), "https://example.com/2"),
            format("139", Some("mp4a.40.5"), "https://example.com/1"),
            format("251", Some("opus"), "https://example.com/3"),
        ]);

        let ids: Vec<&str> = streams.iter().map(|s| s.format_id.as_str()).collect();
        assert_eq!(ids, vec!["139", "140", "139", "251"]);
    }

    #[test]
    fn test_missing_title_falls_back_to_placeholder() {
        let collection = StreamCollection::from_info(VideoInfo::default());
        assert_eq!(collection.title, "Unknown Title");
        assert!(collection.audio_streams.is_empty());
    }

    #[tokio::test]
    async fn test_handler_builds_collection_from_extractor_output() {
        let info = VideoInfo {
            title: Some("Never Gonna Give You Up".to_string()),
            uploader: Some("Rick Astley".to_string()),
            thumbnail: Some("https://example.com/thumb.jpg".to_string()),
            duration: Some(213),
            formats: vec![
                format("137", Some("none"), "https://example.com/v"),
                format("140", Some("mp4a.40.2"), "https://example.com/a"),
            ],
        };
        let extractor = Arc::new(FakeExtractor::succeeding(info));
        let handler = GetStreamsHandler::new(extractor.clone(), "bestaudio/best");

        let collection = handler
            .handle(GetStreams {
                video_id: "dQw4w9WgXcQ".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(collection.title, "Never Gonna Give You Up");
        assert_eq!(collection.duration, Some(213));
        assert_eq!(collection.audio_streams.len(), 1);
        assert_eq!(
            extractor.last_url().as_deref(),
            Some("https://youtu.be/dQw4w9WgXcQ")
        );
    }

    #[tokio::test]
    async fn test_handler_surfaces_extractor_error() {
        let extractor = Arc::new(FakeExtractor::not_found("Video unavailable"));
        let handler = GetStreamsHandler::new(extractor, "bestaudio/best");

        let err = handler
            .handle(GetStreams {
                video_id: "missing".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ExtractError::NotFound(_)));
    }
}
