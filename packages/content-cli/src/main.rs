//! `content` - research digests, post drafts and X publishing.
//!
//! Every research subcommand writes `<timestamp>_<kind>.{json,txt,md}` under its
//! output directory. `publish` reads the newest draft and posts it, but only with
//! `--confirm`.

mod cmd;
mod config;
mod draft;
mod error;
mod files;
mod prompts;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use xai_client::Tool;

use cmd::generate::{self, iso, Generation};
use cmd::publish::{self, PublishArgs};
use cmd::{read_input, resolve_input, split_categories, ResearchArgs};
use error::CliError;
use prompts::{Audience, BuzzMode, Locale, ScoutPreset};

#[derive(Parser)]
#[command(name = "content")]
#[command(about = "Research digests, post drafts and X publishing", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Category trend scout over a recent window
    Scout {
        /// Audience and default categories
        #[arg(long, value_enum, default_value_t = ScoutPreset::Engineering)]
        preset: ScoutPreset,

        /// Lookback window in hours (default: 24, or 48 for anti-aging)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        hours: Option<u32>,

        #[arg(long, value_enum, default_value_t = Locale::Ja)]
        locale: Locale,

        /// Comma-separated category list (default: built-in list)
        #[arg(long)]
        categories: Option<String>,

        /// Top topics per category
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
        top_n: u32,

        #[command(flatten)]
        research: ResearchArgs,
    },

    /// Daily news digest
    News {
        /// Who the digest is about
        #[arg(long, default_value = prompts::DEFAULT_NEWS_SUBJECT)]
        subject: String,

        /// Comma-separated search keywords (default: built-in list)
        #[arg(long)]
        keywords: Option<String>,

        #[arg(long, default_value_t = 24, value_parser = clap::value_parser!(u32).range(1..))]
        hours: u32,

        #[arg(long)]
        categories: Option<String>,

        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
        top_n: u32,

        #[command(flatten)]
        research: ResearchArgs,
    },

    /// Genre-agnostic buzz scout, or practical tips with --mode practical
    Buzz {
        #[arg(long, value_enum, default_value_t = BuzzMode::Buzz)]
        mode: BuzzMode,

        #[arg(long, default_value_t = 48, value_parser = clap::value_parser!(u32).range(1..))]
        hours: u32,

        /// Maximum number of topics
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
        top_n: u32,

        #[command(flatten)]
        research: ResearchArgs,
    },

    /// Context pack for a topic (or an opinion-forming deep dive with --deep)
    Research {
        /// What to research
        #[arg(long)]
        topic: String,

        #[arg(long, value_enum, default_value_t = Locale::Ja)]
        locale: Locale,

        #[arg(long, value_enum, default_value_t = Audience::Engineer)]
        audience: Audience,

        /// Research goal
        #[arg(
            long,
            default_value = "Background research that deepens an article: primary sources, terms, counterpoints, numbers"
        )]
        goal: String,

        /// Lookback hint in days
        #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..))]
        days: u32,

        /// Deep dive: facts, supportive and critical voices, gaps
        #[arg(long)]
        deep: bool,

        /// Lookback window in hours for --deep
        #[arg(long, default_value_t = 72, value_parser = clap::value_parser!(u32).range(1..))]
        hours: u32,

        #[command(flatten)]
        research: ResearchArgs,
    },

    /// Post drafts from the newest news digest
    Draft {
        /// Digest file (default: newest .txt in --source-dir)
        #[arg(long)]
        input: Option<PathBuf>,

        #[arg(long, default_value = "data/news-digest")]
        source_dir: PathBuf,

        #[command(flatten)]
        research: ResearchArgs,
    },

    /// Publish a draft to X
    Publish(PublishArgs),
}

/// The name a value enum has on the command line.
fn value_name<T: ValueEnum>(value: T) -> String {
    value
        .to_possible_value()
        .map(|v| v.get_name().to_string())
        .unwrap_or_default()
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let now = Utc::now();
    let now_iso = iso(now);

    match cli.command {
        Commands::Scout {
            preset,
            hours,
            locale,
            categories,
            top_n,
            research,
        } => {
            let hours = hours.unwrap_or_else(|| preset.default_hours());
            let categories = split_categories(categories.as_deref(), preset.default_categories());
            let (kind, title, default_out_dir) = match preset {
                ScoutPreset::Engineering => ("trend-scout", "Trend Scout", "data/trend-scout"),
                ScoutPreset::AntiAging => ("anti-aging-scout", "Anti-Aging Scout", "data/anti-aging-scout"),
            };
            let generation = Generation {
                kind,
                title: title.into(),
                prompt: prompts::trend_scout(preset, locale, hours, &categories, top_n, &now_iso),
                tools: vec![Tool::XSearch],
                params: json!({
                    "preset": value_name(preset),
                    "hours": hours,
                    "locale": value_name(locale),
                    "categories": categories,
                    "top_n": top_n,
                }),
                meta: vec![("Window".into(), format!("last {}h", hours))],
                default_out_dir,
                now,
            };
            generate::run(&research, generation).await
        }

        Commands::News {
            subject,
            keywords,
            hours,
            categories,
            top_n,
            research,
        } => {
            let subject = subject.trim().to_string();
            if subject.is_empty() {
                return Err(CliError::Usage("--subject must not be blank.".into()).into());
            }
            let keywords = split_categories(keywords.as_deref(), prompts::DEFAULT_NEWS_KEYWORDS);
            let categories = split_categories(categories.as_deref(), prompts::DEFAULT_NEWS_CATEGORIES);
            let generation = Generation {
                kind: "news-digest",
                title: "News Digest".into(),
                prompt: prompts::news_digest(&subject, &keywords, hours, &categories, top_n, &now_iso),
                tools: vec![Tool::XSearch],
                params: json!({
                    "subject": subject,
                    "keywords": keywords,
                    "hours": hours,
                    "categories": categories,
                    "top_n": top_n,
                }),
                meta: vec![
                    ("Subject".into(), subject.clone()),
                    ("Window".into(), format!("last {}h", hours)),
                ],
                default_out_dir: "data/news-digest",
                now,
            };
            generate::run(&research, generation).await
        }

        Commands::Buzz {
            mode,
            hours,
            top_n,
            research,
        } => {
            let (kind, title, prompt) = match mode {
                BuzzMode::Buzz => ("buzz-scout", "Buzz Scout", prompts::buzz_scout(hours, top_n, &now_iso)),
                BuzzMode::Practical => (
                    "practical-scout",
                    "Practical Trends",
                    prompts::practical_scout(hours, top_n, &now_iso),
                ),
            };
            let mode_name = value_name(mode);
            let generation = Generation {
                kind,
                title: title.into(),
                prompt,
                tools: vec![Tool::XSearch],
                params: json!({ "mode": mode_name, "hours": hours, "top_n": top_n }),
                meta: vec![
                    ("Window".into(), format!("last {}h", hours)),
                    ("Mode".into(), mode_name.clone()),
                    ("Top-N".into(), top_n.to_string()),
                ],
                default_out_dir: "data/buzz-scout",
                now,
            };
            generate::run(&research, generation).await
        }

        Commands::Research {
            topic,
            locale,
            audience,
            goal,
            days,
            deep,
            hours,
            research,
        } => {
            let topic = topic.trim().to_string();
            if topic.is_empty() {
                return Err(CliError::Usage("Missing --topic.".into()).into());
            }

            let generation = if deep {
                Generation {
                    kind: "deep-research",
                    title: "Deep Research".into(),
                    prompt: prompts::deep_research(&topic, locale, hours, &now_iso),
                    tools: vec![Tool::XSearch],
                    params: json!({ "topic": topic, "hours": hours }),
                    meta: vec![("Topic".into(), topic.clone())],
                    default_out_dir: "data/deep-research",
                    now,
                }
            } else {
                Generation {
                    kind: "context-research",
                    title: "Context Pack".into(),
                    prompt: prompts::context_research(&topic, locale, audience, &goal, days, &now_iso),
                    tools: vec![Tool::XSearch],
                    params: json!({
                        "topic": topic,
                        "audience": value_name(audience),
                        "goal": goal,
                        "days": days,
                    }),
                    meta: vec![
                        ("Topic".into(), topic.clone()),
                        ("Audience".into(), value_name(audience)),
                    ],
                    default_out_dir: "data/context-research",
                    now,
                }
            };
            generate::run(&research, generation).await
        }

        Commands::Draft {
            input,
            source_dir,
            research,
        } => {
            let source = resolve_input(input.as_deref(), &source_dir, "news")?;
            let source_text = read_input(&source, "digest")?;
            let source_name = source.display().to_string();
            eprintln!("Digest source: {}", source_name);

            let generation = Generation {
                kind: "post-drafts",
                title: "Post Drafts".into(),
                prompt: prompts::post_drafts(&source_text, &source_name, &now_iso),
                tools: Vec::new(),
                params: json!({ "input": source_name }),
                meta: vec![("Source".into(), source_name.clone())],
                default_out_dir: "data/post-drafts",
                now,
            };
            generate::run(&research, generation).await
        }

        Commands::Publish(args) => publish::run(&args).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = config::load_dotenv();
    init_tracing();
    match dotenv {
        Ok(Some(path)) => tracing::debug!(path = %path.display(), "Loaded .env"),
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "Failed to load .env"),
    }

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::from(error::exit_code(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_publish_defaults() {
        let cli = Cli::try_parse_from(["content", "publish"]).unwrap();
        match cli.command {
            Commands::Publish(args) => {
                assert_eq!(args.mode, publish::Mode::Single);
                assert_eq!(args.pick, 1);
                assert_eq!(args.post_dir, PathBuf::from("data/post-drafts"));
                assert!(!args.confirm);
            }
            _ => panic!("expected publish"),
        }
    }

    #[test]
    fn test_value_name_matches_cli_spelling() {
        assert_eq!(value_name(ScoutPreset::AntiAging), "anti-aging");
        assert_eq!(value_name(BuzzMode::Practical), "practical");
        assert_eq!(value_name(Locale::Ja), "ja");
    }

    #[test]
    fn test_parse_buzz_defaults() {
        let cli = Cli::try_parse_from(["content", "buzz", "--mode", "practical"]).unwrap();
        match cli.command {
            Commands::Buzz { mode, hours, top_n, .. } => {
                assert_eq!(mode, BuzzMode::Practical);
                assert_eq!(hours, 48);
                assert_eq!(top_n, 10);
            }
            _ => panic!("expected buzz"),
        }
    }

    #[test]
    fn test_parse_news_subject_defaults() {
        let cli = Cli::try_parse_from(["content", "news"]).unwrap();
        match cli.command {
            Commands::News { subject, keywords, .. } => {
                assert_eq!(subject, prompts::DEFAULT_NEWS_SUBJECT);
                assert!(keywords.is_none());
            }
            _ => panic!("expected news"),
        }
    }

    #[test]
    fn test_parse_scout_preset_leaves_hours_to_preset() {
        let cli = Cli::try_parse_from(["content", "scout", "--preset", "anti-aging"]).unwrap();
        match cli.command {
            Commands::Scout { preset, hours, .. } => {
                assert_eq!(preset, ScoutPreset::AntiAging);
                assert_eq!(hours, None);
            }
            _ => panic!("expected scout"),
        }
    }

    #[test]
    fn test_parse_scout_rejects_zero_hours() {
        assert!(Cli::try_parse_from(["content", "scout", "--hours", "0"]).is_err());
    }
}
