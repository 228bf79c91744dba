use thiserror::Error;

/// Failure conditions for transcript fetching.
///
/// The three named upstream conditions get their own variants so the shell
/// can render each with a distinct message; everything else is generic.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("subtitles are disabled for video {video_id}")]
    TranscriptsDisabled { video_id: String },

    #[error("video {video_id} is unavailable or does not exist")]
    VideoUnavailable { video_id: String },

    #[error("no transcript found for video {video_id} in language {lang}")]
    NoTranscriptFound { video_id: String, lang: String },

    #[error("transcript fetch failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transcript fetch failed: {reason}")]
    Parse { reason: String },
}

impl FetchError {
    /// Conditions reported to the user as warnings rather than errors
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            FetchError::TranscriptsDisabled { .. } | FetchError::NoTranscriptFound { .. }
        )
    }
}
