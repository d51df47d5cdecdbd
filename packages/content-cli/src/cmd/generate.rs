//! Prompt → research client → timestamped artifacts.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use colored::Colorize;
use serde_json::{json, Value};
use tracing::info;
use xai_client::{ResponsesRequest, Tool, XaiClient};

use super::ResearchArgs;
use crate::config::resolve_xai_config;
use crate::files::{save_file, timestamp_slug};

/// One generation run, fully described before anything is sent.
#[derive(Debug, Clone)]
pub struct Generation {
    /// Artifact name suffix, e.g. `trend-scout`.
    pub kind: &'static str,
    /// Markdown title of the `.md` artifact.
    pub title: String,
    pub prompt: String,
    pub tools: Vec<Tool>,
    /// Recorded verbatim in the `.json` artifact.
    pub params: Value,
    /// Extra `- key: value` lines for the `.md` meta block.
    pub meta: Vec<(String, String)>,
    pub default_out_dir: &'static str,
    pub now: DateTime<Utc>,
}

/// Paths written by a generation run.
#[derive(Debug)]
pub struct Saved {
    pub json: PathBuf,
    pub txt: PathBuf,
    pub md: PathBuf,
}

pub fn iso(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn render_markdown(generation: &Generation, text: &str) -> String {
    let mut md = format!(
        "# {}\n\n## Meta\n- Timestamp (UTC): {}\n",
        generation.title,
        iso(generation.now)
    );
    for (key, value) in &generation.meta {
        md.push_str(&format!("- {}: {}\n", key, value));
    }
    md.push_str(&format!("\n---\n\n{}\n", text));
    md
}

fn write_artifacts(
    generation: &Generation,
    out_dir: &std::path::Path,
    request: &ResponsesRequest,
    raw: &Value,
    text: &str,
) -> Result<Saved> {
    let base = format!("{}_{}", timestamp_slug(generation.now), generation.kind);

    let record = json!({
        "timestamp": iso(generation.now),
        "params": generation.params,
        "request": request,
        "response": raw,
        "extracted_text": text,
    });
    let record = serde_json::to_string_pretty(&record).context("Failed to serialize record")?;

    Ok(Saved {
        json: save_file(out_dir, &format!("{}.json", base), &record)?,
        txt: save_file(out_dir, &format!("{}.txt", base), text)?,
        md: save_file(out_dir, &format!("{}.md", base), &render_markdown(generation, text))?,
    })
}

pub async fn run(args: &ResearchArgs, generation: Generation) -> Result<()> {
    let config = resolve_xai_config(&args.overrides());
    let request = ResponsesRequest::new(config.model.clone(), generation.prompt.clone())
        .tools(generation.tools.clone());

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    let client = XaiClient::new(config)?;
    info!(kind = generation.kind, model = client.model(), "Requesting generation");
    let response = client.respond(request.clone()).await?;

    let out_dir = args
        .out_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(generation.default_out_dir));
    let saved = write_artifacts(&generation, &out_dir, &request, &response.raw, &response.text)?;

    for path in [&saved.json, &saved.txt, &saved.md] {
        eprintln!("{} {}", "Saved:".green(), path.display());
    }

    if args.raw_json {
        eprintln!("{}", serde_json::to_string_pretty(&response.raw)?);
    }

    println!("{}", response.text);
    Ok(())
}
