use eyre::{Result, bail};
use log::debug;

/// The pretrained checkpoint used for summarization. Fixed; not configurable
/// at runtime.
pub const MODEL_ID: &str = "facebook/bart-large-cnn";

const INFERENCE_API_BASE: &str = "https://api-inference.huggingface.co/models";

/// Maximum chunk size fed to the model, in characters.
///
/// A positional character split is an approximation of the model's token
/// window; it can truncate awkwardly at chunk boundaries but keeps the
/// partition exact and order-preserving.
pub const CHUNK_SIZE: usize = 1024;

/// Default maximum summary length per chunk, in model tokens
pub const DEFAULT_MAX_LENGTH: u32 = 150;
/// Default minimum summary length per chunk, in model tokens
pub const DEFAULT_MIN_LENGTH: u32 = 30;

/// Per-chunk output length bounds, in model-defined length units
#[derive(Debug, Clone, Copy)]
pub struct SummaryOptions {
    pub max_length: u32,
    pub min_length: u32,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

impl SummaryOptions {
    pub fn validate(&self) -> Result<()> {
        if self.max_length == 0 || self.min_length == 0 {
            bail!("summary length bounds must be positive");
        }
        if self.min_length > self.max_length {
            bail!(
                "minimum summary length ({}) exceeds maximum ({})",
                self.min_length,
                self.max_length
            );
        }
        Ok(())
    }
}

/// Handle to the summarization model, constructed once at startup and shared
/// across requests
pub struct Summarizer {
    client: reqwest::Client,
    api_token: String,
    inference_url: String,
}

impl Summarizer {
    pub fn new(client: reqwest::Client, api_token: String) -> Self {
        Self {
            client,
            api_token,
            inference_url: format!("{INFERENCE_API_BASE}/{MODEL_ID}"),
        }
    }

    /// Summarize text by feeding fixed-size chunks through the model.
    ///
    /// Empty input returns an empty summary without touching the model.
    /// Chunk summaries come back joined by single spaces, in chunk order.
    pub async fn summarize(&self, text: &str, options: &SummaryOptions) -> Result<String> {
        options.validate()?;

        if text.is_empty() {
            return Ok(String::new());
        }

        let chunks = chunk_text(text, CHUNK_SIZE);
        debug!("Summarizing {} chunks with {MODEL_ID}", chunks.len());

        let mut summaries = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            summaries.push(self.summarize_chunk(chunk, options).await?);
        }

        Ok(summaries.join(" "))
    }

    async fn summarize_chunk(&self, chunk: &str, options: &SummaryOptions) -> Result<String> {
        let body = serde_json::json!({
            "inputs": chunk,
            "parameters": {
                "max_length": options.max_length,
                "min_length": options.min_length,
                // Deterministic generation: identical input and weights give
                // identical output
                "do_sample": false
            },
            "options": {
                "wait_for_model": true
            }
        });

        let resp = self
            .client
            .post(&self.inference_url)
            .bearer_auth(&self.api_token)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("inference API returned {status}: {body}");
        }

        let json: serde_json::Value = resp.json().await?;
        extract_summary_text(&json)
    }
}

/// Split text into contiguous chunks of at most `chunk_size` characters.
///
/// The split is positional (no regard for word or sentence boundaries) but
/// always lands on a character boundary; chunks concatenate back to exactly
/// the input.
pub fn chunk_text(text: &str, chunk_size: usize) -> Vec<&str> {
    assert!(chunk_size > 0, "chunk_size must be non-zero");

    let mut chunks = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let end = rest
            .char_indices()
            .nth(chunk_size)
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        let (chunk, tail) = rest.split_at(end);
        chunks.push(chunk);
        rest = tail;
    }
    chunks
}

fn extract_summary_text(json: &serde_json::Value) -> Result<String> {
    if let Some(text) = json
        .get(0)
        .and_then(|entry| entry.get("summary_text"))
        .and_then(|t| t.as_str())
    {
        return Ok(text.to_string());
    }
    bail!("unexpected inference API response format");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_text_empty() {
        assert!(chunk_text("", CHUNK_SIZE).is_empty());
    }

    #[test]
    fn test_chunk_text_short_input_single_chunk() {
        let chunks = chunk_text("hello world", CHUNK_SIZE);
        assert_eq!(chunks, vec!["hello world"]);
    }

    #[test]
    fn test_chunk_text_exact_boundary() {
        let text = "a".repeat(CHUNK_SIZE);
        let chunks = chunk_text(&text, CHUNK_SIZE);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].chars().count(), CHUNK_SIZE);
    }

    #[test]
    fn test_chunk_text_one_over_boundary() {
        let text = "a".repeat(CHUNK_SIZE + 1);
        let chunks = chunk_text(&text, CHUNK_SIZE);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chars().count(), CHUNK_SIZE);
        assert_eq!(chunks[1].chars().count(), 1);
    }

    #[test]
    fn test_chunk_text_2000_chars_gives_two_chunks() {
        let text = "x".repeat(2000);
        let chunks = chunk_text(&text, CHUNK_SIZE);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chars().count(), 1024);
        assert_eq!(chunks[1].chars().count(), 976);
    }

    #[test]
    fn test_chunk_text_round_trips() {
        for len in [0, 1, 1023, 1024, 1025, 2048, 5000] {
            let text: String = "abcde".chars().cycle().take(len).collect();
            let chunks = chunk_text(&text, CHUNK_SIZE);
            let expected = len.div_ceil(CHUNK_SIZE);
            assert_eq!(chunks.len(), expected, "chunk count for len {len}");
            assert_eq!(chunks.concat(), text, "round trip for len {len}");
        }
    }

    #[test]
    fn test_chunk_text_splits_on_char_boundaries() {
        let text: String = "日本語のテキスト".chars().cycle().take(1500).collect();
        let chunks = chunk_text(&text, CHUNK_SIZE);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chars().count(), 1024);
        assert_eq!(chunks[1].chars().count(), 476);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_chunk_text_small_size() {
        let chunks = chunk_text("abcdef", 4);
        assert_eq!(chunks, vec!["abcd", "ef"]);
    }

    #[test]
    fn test_extract_summary_text() {
        let json = serde_json::json!([
            { "summary_text": "Here is the summary." }
        ]);
        assert_eq!(extract_summary_text(&json).unwrap(), "Here is the summary.");
    }

    #[test]
    fn test_extract_summary_text_empty_array() {
        let json = serde_json::json!([]);
        assert!(extract_summary_text(&json).is_err());
    }

    #[test]
    fn test_extract_summary_text_error_payload() {
        let json = serde_json::json!({ "error": "Model is overloaded" });
        assert!(extract_summary_text(&json).is_err());
    }

    #[test]
    fn test_inference_url_targets_model() {
        let summarizer = Summarizer::new(reqwest::Client::new(), "test-token".to_string());
        assert!(summarizer.inference_url.starts_with("https://"));
        assert!(summarizer.inference_url.ends_with(MODEL_ID));
    }

    #[test]
    fn test_default_options() {
        let options = SummaryOptions::default();
        assert_eq!(options.max_length, 150);
        assert_eq!(options.min_length, 30);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_options_min_over_max_rejected() {
        let options = SummaryOptions {
            max_length: 30,
            min_length: 150,
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_options_zero_rejected() {
        let options = SummaryOptions {
            max_length: 0,
            min_length: 0,
        };
        assert!(options.validate().is_err());
    }

    #[tokio::test]
    async fn test_summarize_empty_input_skips_model() {
        // No network stub is set up, so any model invocation would error out.
        let summarizer = Summarizer::new(reqwest::Client::new(), "test-token".to_string());
        let summary = summarizer
            .summarize("", &SummaryOptions::default())
            .await
            .unwrap();
        assert_eq!(summary, "");
    }

    #[tokio::test]
    async fn test_summarize_rejects_bad_options_before_model() {
        let summarizer = Summarizer::new(reqwest::Client::new(), "test-token".to_string());
        let options = SummaryOptions {
            max_length: 10,
            min_length: 20,
        };
        assert!(summarizer.summarize("some text", &options).await.is_err());
    }
}
