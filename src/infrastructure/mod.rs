//! Infrastructure Layer
//!
//! - HTTP: RESTful API
//! - Adapters: Extractor Client（yt-dlp / Fake）

pub mod adapters;
pub mod http;
