//! Data Transfer Objects
//!
//! HTTP 响应结构

use serde::Serialize;

use crate::application::queries::{AudioStream, StreamCollection};

/// 根端点响应
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub version: &'static str,
}

/// 音频流列表响应
///
/// 未知的可选字段直接省略，不序列化占位值
#[derive(Debug, Serialize)]
pub struct StreamsResponse {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploader: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,

    pub audio_streams: Vec<AudioStreamResponse>,
}

/// 单条音频流响应
#[derive(Debug, Serialize)]
pub struct AudioStreamResponse {
    pub format_id: String,
    pub ext: String,
    pub abr: f64,
    pub acodec: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filesize: Option<u64>,

    pub url: String,
}

impl From<StreamCollection> for StreamsResponse {
    fn from(collection: StreamCollection) -> Self {
        Self {
            title: collection.title,
            uploader: collection.uploader,
            thumbnail: collection.thumbnail,
            duration: collection.duration,
            audio_streams: collection
                .audio_streams
                .into_iter()
                .map(AudioStreamResponse::from)
                .collect(),
        }
    }
}

impl From<AudioStream> for AudioStreamResponse {
    fn from(stream: AudioStream) -> Self {
        Self {
            format_id: stream.format_id,
            ext: stream.ext,
            abr: stream.abr,
            acodec: stream.acodec,
            filesize: stream.filesize,
            url: stream.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_optional_fields_are_omitted() {
        let response = StreamsResponse {
            title: "Unknown Title".to_string(),
            uploader: None,
            thumbnail: None,
            duration: None,
            audio_streams: vec![],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["title"], "Unknown Title");
        assert!(json.get("uploader").is_none());
        assert!(json.get("thumbnail").is_none());
        assert!(json.get("duration").is_none());
        assert_eq!(json["audio_streams"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_present_fields_are_serialized() {
        let response = StreamsResponse {
            title: "Test".to_string(),
            uploader: Some("Uploader".to_string()),
            thumbnail: Some("https://example.com/t.jpg".to_string()),
            duration: Some(213),
            audio_streams: vec![AudioStreamResponse {
                format_id: "140".to_string(),
                ext: "m4a".to_string(),
                abr: 129.5,
                acodec: "mp4a.40.2".to_string(),
                filesize: None,
                url: "https://example.com/a".to_string(),
            }],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["duration"], 213);
        let stream = &json["audio_streams"][0];
        assert_eq!(stream["format_id"], "140");
        assert!(stream.get("filesize").is_none());
    }
}
