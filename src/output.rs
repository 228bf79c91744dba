use std::path::{Path, PathBuf};

use eyre::Result;
use log::debug;

/// Fixed filename for the saved summary. Repeated runs into the same
/// directory overwrite it.
pub const SUMMARY_FILENAME: &str = "summary.txt";

/// Fixed filename for the saved cleaned transcript. Repeated runs into the
/// same directory overwrite it.
pub const TRANSCRIPT_FILENAME: &str = "transcript.txt";

/// Write the summary into `dir`, returning the full path written
pub fn write_summary(dir: &Path, summary: &str) -> Result<PathBuf> {
    write_artifact(dir, SUMMARY_FILENAME, summary)
}

/// Write the cleaned transcript into `dir`, returning the full path written
pub fn write_transcript(dir: &Path, transcript: &str) -> Result<PathBuf> {
    write_artifact(dir, TRANSCRIPT_FILENAME, transcript)
}

fn write_artifact(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    std::fs::write(&path, content)?;
    debug!("Wrote {}", path.display());
    Ok(path)
}
