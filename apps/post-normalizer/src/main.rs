//! # Post Normalizer
//!
//! Reads raw posts, writes one normalized record per line to stdout.

use std::fs;
use std::io::{self, BufWriter, Read, Write};

use anyhow::{Context, bail};
use ornus_core::RecordTransformer;
use ornus_core::ports::SentimentScorer;
use ornus_infra::LexiconSentimentScorer;

mod config;
mod input;
mod telemetry;

use config::AppConfig;
use telemetry::TelemetryConfig;

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let scorer = LexiconSentimentScorer::default();

    tracing::info!(
        label = %config.label,
        scorer = scorer.name(),
        empty_text = ?config.empty_text,
        "Starting post normalizer"
    );

    let raw = read_input(&config)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = run(&config, &raw, &mut out, &scorer)?;

    tracing::info!(
        total = summary.total,
        written = summary.total - summary.failed,
        failed = summary.failed,
        "Normalization finished"
    );

    if summary.failed > 0 {
        bail!(
            "{} of {} posts failed to normalize",
            summary.failed,
            summary.total
        );
    }
    Ok(())
}

/// Counts from one normalization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RunSummary {
    total: usize,
    failed: usize,
}

/// Normalize every post in `raw`, writing one JSON record per line to `out`.
///
/// Posts that fail are logged and counted; only output errors abort the run.
fn run(
    config: &AppConfig,
    raw: &str,
    out: &mut impl Write,
    scorer: &impl SentimentScorer,
) -> anyhow::Result<RunSummary> {
    let posts = input::parse_posts(raw);
    let total = posts.len();
    let mut failed = 0usize;

    for (index, post) in posts.into_iter().enumerate() {
        let result = post.and_then(|post| {
            RecordTransformer::new(&post, &config.label, scorer)
                .with_empty_text_policy(config.empty_text)
                .build()
        });

        match result {
            Ok(record) => {
                serde_json::to_writer(&mut *out, &record).context("Failed to write record")?;
                out.write_all(b"\n").context("Failed to write record")?;
            }
            Err(e) => {
                failed += 1;
                tracing::warn!(index, kind = input::describe(&e), error = %e, "Skipping post");
            }
        }
    }
    out.flush().context("Failed to flush output")?;

    Ok(RunSummary { total, failed })
}

fn read_input(config: &AppConfig) -> anyhow::Result<String> {
    match &config.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ornus_core::{EmptyTextPolicy, NormalizedRecord};

    fn config(policy: EmptyTextPolicy) -> AppConfig {
        AppConfig {
            label: "AAPL".to_string(),
            input: None,
            empty_text: policy,
        }
    }

    fn post_line(id: u64, text: &str) -> String {
        serde_json::json!({
            "id": id,
            "text": text,
            "created_at": "Fri Apr 25 10:43:41 +0000 2014",
            "entities": {"hashtags": [{"text": "AAPL"}]},
            "retweet_count": 5,
            "user": {
                "created_at": "Mon Jan 1 00:00:00 +0000 2020",
                "id": 7,
                "followers_count": 10,
                "friends_count": 3
            }
        })
        .to_string()
    }

    fn records(out: &[u8]) -> Vec<NormalizedRecord> {
        std::str::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_mixed_input_writes_only_good_records() {
        let raw = format!(
            "{}\n{{\"id\": 2}}\n{{broken\n{}\n",
            post_line(1, "I love this stock."),
            post_line(3, "Terrible quarter.")
        );
        let mut out = Vec::new();
        let summary = run(
            &config(EmptyTextPolicy::Fail),
            &raw,
            &mut out,
            &LexiconSentimentScorer::default(),
        )
        .unwrap();

        assert_eq!(summary, RunSummary { total: 4, failed: 2 });
        let written = records(&out);
        assert_eq!(written.len(), 2);
        assert_eq!(written[0].id, 1);
        assert_eq!(written[1].id, 3);
        assert!(written.iter().all(|r| r.label == "AAPL"));
    }

    #[test]
    fn test_empty_text_fails_by_default() {
        let mut out = Vec::new();
        let summary = run(
            &config(EmptyTextPolicy::Fail),
            &post_line(1, "   "),
            &mut out,
            &LexiconSentimentScorer::default(),
        )
        .unwrap();

        assert_eq!(summary, RunSummary { total: 1, failed: 1 });
        assert!(out.is_empty());
    }

    #[test]
    fn test_empty_text_neutral_policy_writes_zero() {
        let mut out = Vec::new();
        let summary = run(
            &config(EmptyTextPolicy::Neutral),
            &post_line(1, "   "),
            &mut out,
            &LexiconSentimentScorer::default(),
        )
        .unwrap();

        assert_eq!(summary, RunSummary { total: 1, failed: 0 });
        let written = records(&out);
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].sentiment, 0.0);
    }

    #[test]
    fn test_emoji_post_normalizes() {
        let mut out = Vec::new();
        let summary = run(
            &config(EmptyTextPolicy::Fail),
            &post_line(9, "🚀🚀🚀"),
            &mut out,
            &LexiconSentimentScorer::default(),
        )
        .unwrap();

        assert_eq!(summary.failed, 0);
        assert_eq!(records(&out)[0].sentiment, 0.0);
    }
}
