use std::io::{self, BufRead};
use std::path::PathBuf;

use eyre::{Result, bail};
use log::{debug, info};

mod cli;

use cli::Cli;
use ytsum::error::FetchError;
use ytsum::summarize::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, SummaryOptions, Summarizer};

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytsum.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytsum")
        .join("logs")
}

fn build_after_help() -> String {
    let have_token = std::env::var("HF_API_TOKEN")
        .map(|t| !t.is_empty())
        .unwrap_or(false);

    let token_line = if have_token {
        "  \x1b[32m✅\x1b[0m HF_API_TOKEN is set".to_string()
    } else {
        "  \x1b[31m❌\x1b[0m HF_API_TOKEN not set (or put hf_api_token in the config file)"
            .to_string()
    };

    let log_path = log_dir().join("ytsum.log");

    format!(
        "\nAUTHENTICATION:\n{token_line}\n\nConfig file: {}\nLogs are written to: {}",
        ytsum::config::config_path().display(),
        log_path.display()
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let after_help = build_after_help();
    let cmd = <Cli as clap::CommandFactory>::command().after_help(after_help);
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    // Load config file (non-fatal if missing/invalid)
    let config = ytsum::config::Config::load().unwrap_or_default();

    // Apply config defaults (CLI flags take priority)
    let lang = cli
        .lang
        .clone()
        .or_else(|| config.default_lang.clone())
        .unwrap_or_else(|| "en".to_string());
    let options = SummaryOptions {
        max_length: cli
            .max_length
            .or(config.default_max_length)
            .unwrap_or(DEFAULT_MAX_LENGTH),
        min_length: cli
            .min_length
            .or(config.default_min_length)
            .unwrap_or(DEFAULT_MIN_LENGTH),
    };
    options.validate()?;

    if cli.verbose {
        let config_path = ytsum::config::config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
        if let Some(ref default_lang) = config.default_lang {
            debug!("Config default_lang: {default_lang}");
        }
    }

    // The model handle is built once, up front. A missing token fails here,
    // before any URL is touched.
    let api_token = std::env::var("HF_API_TOKEN")
        .ok()
        .filter(|t| !t.is_empty())
        .or_else(|| config.hf_api_token.clone())
        .ok_or_else(|| {
            eyre::eyre!(
                "no Hugging Face API token found\n\nSet the HF_API_TOKEN environment variable or add hf_api_token to {}",
                ytsum::config::config_path().display()
            )
        })?;

    let client = reqwest::Client::new();
    let summarizer = Summarizer::new(client.clone(), api_token);

    // Collect URLs: from arg or stdin
    let urls = if let Some(ref url) = cli.url {
        vec![url.clone()]
    } else {
        let stdin = io::stdin();
        stdin.lock().lines().collect::<Result<Vec<_>, _>>()?
    };

    if urls.is_empty() {
        bail!("no URL provided\n\nUsage: ytsum <URL>\n       echo <URL> | ytsum");
    }

    let mut processed = 0usize;
    let mut failures = 0usize;
    for url_input in &urls {
        let url_input = url_input.trim();
        if url_input.is_empty() {
            continue;
        }
        processed += 1;

        if let Err(e) = process_url(url_input, &client, &summarizer, &lang, &options, &cli).await {
            match e.downcast_ref::<FetchError>() {
                Some(fe) if fe.is_warning() => eprintln!("warning: {fe}"),
                _ => eprintln!("error: {e}"),
            }
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{failures} of {processed} URLs failed");
    }

    Ok(())
}

async fn process_url(
    url_input: &str,
    client: &reqwest::Client,
    summarizer: &Summarizer,
    lang: &str,
    options: &SummaryOptions,
    cli: &Cli,
) -> Result<()> {
    let video_id = ytsum::extract_video_id(url_input).ok_or_else(|| {
        eyre::eyre!(
            "could not extract a video ID from: {url_input}\n\nSupported format:\n  https://www.youtube.com/watch?v=ID"
        )
    })?;

    let transcript = ytsum::youtube::fetch_captions(client, &video_id, lang).await?;

    if cli.verbose {
        eprintln!(
            "Video: {}\nLanguage: {}\nSegments: {}",
            transcript.video_id,
            transcript.language,
            transcript.segments.len(),
        );
    }

    let raw = transcript.text();
    if raw.trim().is_empty() {
        bail!("transcript for video {video_id} contains no text");
    }

    let cleaned = ytsum::clean::clean_text(&raw);
    if cleaned.is_empty() {
        bail!("transcript for video {video_id} is empty after cleaning");
    }

    let summary = summarizer.summarize(&cleaned, options).await?;

    if cli.transcript {
        println!("{cleaned}\n\n--- Summary ---\n{summary}");
    } else {
        println!("{summary}");
    }

    if cli.save_summary {
        let path = ytsum::output::write_summary(&cli.output_dir, &summary)?;
        if cli.verbose {
            eprintln!("Summary written to: {}", path.display());
        }
    }
    if cli.save_transcript {
        let path = ytsum::output::write_transcript(&cli.output_dir, &cleaned)?;
        if cli.verbose {
            eprintln!("Transcript written to: {}", path.display());
        }
    }

    Ok(())
}
