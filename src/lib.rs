pub mod clean;
pub mod config;
pub mod error;
pub mod output;
pub mod summarize;
pub mod youtube;

use url::Url;

/// A single captioned segment
#[derive(Debug, Clone)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Complete transcript for a video
#[derive(Debug, Clone)]
pub struct Transcript {
    pub video_id: String,
    pub language: String,
    pub segments: Vec<Segment>,
}

impl Transcript {
    /// Full transcript text: segment texts in original order, joined by single spaces
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Extract the video ID from a URL's `v` query parameter.
///
/// Returns the first non-empty `v` value, percent-decoded. Other URL shapes
/// (youtu.be, /embed/, /shorts/, bare IDs) are not recognized.
pub fn extract_video_id(input: &str) -> Option<String> {
    let url = Url::parse(input.trim()).ok()?;
    for (key, value) in url.query_pairs() {
        if key == "v" && !value.is_empty() {
            return Some(value.into_owned());
        }
    }
    None
}
