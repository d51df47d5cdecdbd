//! Publish a generated draft to X.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use tracing::debug;
use x_post::{PostResult, XPostClient, XPostError};

use super::{read_input, resolve_input};
use crate::config::resolve_x_post_config;
use crate::draft::{parse_draft, Draft};
use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// One standalone post from Pattern A
    Single,
    /// The whole Pattern B thread
    Thread,
}

#[derive(Debug, Clone, Args)]
pub struct PublishArgs {
    /// Posting mode
    #[arg(long, value_enum, default_value_t = Mode::Single)]
    pub mode: Mode,

    /// Which single-post draft to use (clamped to 1-3)
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub pick: i64,

    /// Draft file (default: newest .txt in --post-dir)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Directory searched for the newest draft
    #[arg(long, default_value = "data/post-drafts")]
    pub post_dir: PathBuf,

    /// Required to actually post
    #[arg(long)]
    pub confirm: bool,

    /// Show what would be posted without sending
    #[arg(long)]
    pub dry_run: bool,
}

/// What `publish` will send, decided before any credential is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    Single { pick: usize, text: String },
    Thread(Vec<String>),
}

pub fn clamp_pick(pick: i64) -> usize {
    pick.clamp(1, 3) as usize
}

pub fn plan(draft: Draft, mode: Mode, pick: i64) -> Result<Plan> {
    match mode {
        Mode::Single => {
            let pick = clamp_pick(pick);
            let count = draft.singles.len();
            let text = draft.singles.into_iter().nth(pick - 1).ok_or_else(|| {
                CliError::Usage(format!(
                    "Draft has {} single posts. --pick {} is out of range.",
                    count, pick
                ))
            })?;
            Ok(Plan::Single { pick, text })
        }
        Mode::Thread => {
            if draft.thread.is_empty() {
                return Err(CliError::Usage("No thread posts found in draft file.".into()).into());
            }
            Ok(Plan::Thread(draft.thread))
        }
    }
}

fn print_plan(plan: &Plan) {
    match plan {
        Plan::Single { pick, text } => {
            println!("\n--- Single Post (Draft #{}) ---", pick);
            println!("{}", text);
            println!("---\n");
        }
        Plan::Thread(texts) => {
            println!("\n--- Thread ({} posts) ---", texts.len());
            for (i, text) in texts.iter().enumerate() {
                println!("\n[{}/{}]", i + 1, texts.len());
                println!("{}", text);
            }
            println!("\n---\n");
        }
    }
}

fn print_posts(posts: &[PostResult]) {
    for (i, post) in posts.iter().enumerate() {
        println!("  [{}] ID: {} {}", i + 1, post.id, post.url().dimmed());
    }
}

pub async fn run(args: &PublishArgs) -> Result<()> {
    let path = resolve_input(args.input.as_deref(), &args.post_dir, "draft")?;
    let content = read_input(&path, "draft")?;
    eprintln!("Draft source: {}", path.display());

    let draft = parse_draft(&content);
    if draft.outline.is_some() {
        debug!("Draft includes an article outline; it is not posted");
    }

    let plan = plan(draft, args.mode, args.pick)?;
    print_plan(&plan);

    if args.dry_run {
        match plan {
            Plan::Single { .. } => println!("[DRY RUN] Would post the above text."),
            Plan::Thread(_) => println!("[DRY RUN] Would post the above thread."),
        }
        return Ok(());
    }

    if !args.confirm {
        return Err(CliError::NotConfirmed.into());
    }

    let client = XPostClient::new(resolve_x_post_config())?;

    match plan {
        Plan::Single { text, .. } => {
            let post = client.post(&text, None).await?;
            println!("{} Post ID: {}", "Posted!".green().bold(), post.id);
            println!("URL: {}", post.url());
        }
        Plan::Thread(texts) => match client.post_thread(&texts).await {
            Ok(posts) => {
                println!("{} {} posts.", "Thread posted!".green().bold(), posts.len());
                print_posts(&posts);
            }
            Err(XPostError::PartialThread { posted, source }) => {
                eprintln!(
                    "{} {} of {} posts are live.",
                    "Thread incomplete:".yellow().bold(),
                    posted.len(),
                    texts.len()
                );
                print_posts(&posted);
                return Err(XPostError::PartialThread { posted, source }.into());
            }
            Err(e) => return Err(e.into()),
        },
    }

    Ok(())
}
