//! Prompt templates for each content domain.
//!
//! These are plain text builders; the model output is treated as opaque text
//! except for post drafts, whose layout [`crate::draft::parse_draft`] relies on.

use clap::ValueEnum;

pub const DEFAULT_TREND_CATEGORIES: &[&str] = &[
    "AI coding tools (Claude Code, Cursor, Copilot, Windsurf, Devin)",
    "AI agents / MCP / automation",
    "LLM and model news (new models, benchmarks, API pricing, policy changes)",
    "Engineering careers, organizations and ways of working",
    "New releases and announcements from overseas (engineering related)",
];

pub const DEFAULT_ANTI_AGING_CATEGORIES: &[&str] = &[
    "Skincare and aesthetic medicine (retinol, hyaluronic acid, botox, laser, stem-cell treatments)",
    "Supplements and nutrients (NMN, NAD+, resveratrol, collagen, vitamin C derivatives)",
    "Exercise and body care (strength training, HIIT, stretching, posture, lymphatic care)",
    "Research and science (telomeres, epigenetics, senolytics, longevity genes, autophagy)",
    "Diet and lifestyle (fasting, Mediterranean diet, sleep, stress management, gut health)",
];

/// Whose news the daily digest covers, unless `--subject` says otherwise.
pub const DEFAULT_NEWS_SUBJECT: &str = "Hokkaido Nippon-Ham Fighters";

pub const DEFAULT_NEWS_KEYWORDS: &[&str] = &[
    "日本ハム",
    "ファイターズ",
    "日ハム",
    "エスコンフィールド",
    "#lovefighters",
    "#日本ハム",
];

pub const DEFAULT_NEWS_CATEGORIES: &[&str] = &[
    "Official announcements (roster moves, injuries, schedule)",
    "Game results and standout performances",
    "Prospects, farm system and call-ups",
    "Front office, trades and contracts",
    "League-wide context that affects the team",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    /// Prefer Japanese-language posts and sources
    Ja,
    /// Prefer English-language posts and sources
    Global,
}

/// Which audience a category scout searches for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScoutPreset {
    /// Engineering news, tools and releases
    Engineering,
    /// Evidence-based anti-aging and wellness topics
    AntiAging,
}

impl ScoutPreset {
    pub fn default_categories(self) -> &'static [&'static str] {
        match self {
            ScoutPreset::Engineering => DEFAULT_TREND_CATEGORIES,
            ScoutPreset::AntiAging => DEFAULT_ANTI_AGING_CATEGORIES,
        }
    }

    pub fn default_hours(self) -> u32 {
        match self {
            ScoutPreset::Engineering => 24,
            ScoutPreset::AntiAging => 48,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BuzzMode {
    /// Whatever is trending, any genre
    Buzz,
    /// Trending posts with practical, actionable value
    Practical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Audience {
    Engineer,
    Investor,
    Both,
}

const GROUND_RULES: &str = "\
- Do not invent numbers or specs. Write `unknown` when something cannot be confirmed.
- Nothing that reads as investment advice.
- No special citation tags in the output. Write plain URLs.";

fn language_line(locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => "Answer in Japanese.",
        Locale::Global => "Answer in English.",
    }
}

fn search_scope_line(locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => {
            "Search Japanese-language posts first, but pick up important overseas news in English too."
        }
        Locale::Global => {
            "Search English-language posts first. Topics trending in Japanese may be included."
        }
    }
}

fn quoted_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("\"{}\"", item))
        .collect::<Vec<_>>()
        .join(", ")
}

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("  {}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Category scout over a recent window.
pub fn trend_scout(
    preset: ScoutPreset,
    locale: Locale,
    hours: u32,
    categories: &[String],
    top_n: u32,
    now_iso: &str,
) -> String {
    let (goal, selection, impact_line) = match preset {
        ScoutPreset::Engineering => (
            format!("find what engineers should know from the last {} hours.", hours),
            "\
- Skip posts that are merely viral. Prefer topics that change day-to-day engineering work.
- Priority: (1) releases, breaking changes, API changes with an official source;
  (2) reproducible implementations, hands-on reports, benchmarks;
  (3) architecture and design discussions with practical impact.
- Every topic needs a primary source URL (docs, GitHub, release notes). Drop topics without one.",
            "Why it matters to engineers",
        ),
        ScoutPreset::AntiAging => (
            format!(
                "find anti-aging and rejuvenation topics discussed on X in the last {} hours, \
                 for readers aged 30-50 who want evidence before they try anything.",
                hours
            ),
            "\
- Evidence first: prefer posts that cite studies, trials or specialists over personal impressions.
- No diagnosis or treatment advice. Always mention side effects and risks of supplements,
  aesthetic treatments and diets.
- Never claim that something cures or reverses aging. Write \"a study reports\" or \"may\".
- Drop stealth marketing and affiliate posts.
- If little qualifies, say it was a quiet period. Do not pad.",
            "Evidence and cautions",
        ),
    };

    format!(
        "{language}

Goal: {goal}
As of: {now_iso}

Rules:
- {scope}
- Use x_search.
{rules}

Selection:
{selection}

Categories ({count}):
{categories}

For each category, list the top {top_n} topics:

## <category>
### <n>. <topic in one line>
- What happened: ...
- {impact_line}: ...
- Representative posts: URL (author, rough engagement)
- Primary source: URL

Finish with:
## Cross-category summary
- The three topics most worth acting on this week, one line each.
",
        language = language_line(locale),
        scope = search_scope_line(locale),
        rules = GROUND_RULES,
        count = categories.len(),
        categories = numbered(categories),
    )
}

/// Genre-agnostic scout for what is trending on Japanese X right now.
pub fn buzz_scout(hours: u32, top_n: u32, now_iso: &str) -> String {
    format!(
        "{language}

Goal: find the most talked-about topics on Japanese X in the last {hours} hours, across every genre:
entertainment, politics and society, sports, technology, business, culture, internet memes.
As of: {now_iso}

Rules:
- Use x_search on Japanese-language posts.
{rules}

Search strategy:
1) Find what is buzzing: posts that talk about trends themselves, posts with outsized likes
   or reposts, breaking news and pile-ons.
2) Sweep each genre for the last {hours} hours: entertainment (celebrities, anime, manga,
   film, music, games, streamers); society and news; sports; technology and IT; business
   and work; internet culture; daily life and seasonal trends.
3) For each topic, find the post that started it and the quote posts and replies that
   carried it. Say why it spread (empathy, anger, surprise, humour).

Selection:
- Most important: is it actually spreading in Japanese X (likes, reposts, replies)?
- Freshness within the window, then reach, then variety across genres.
- If little qualifies, say it was a quiet period. Do not pad.

Output (Markdown):

## Today's buzz
(3-5 lines of overview.)

## Topics
(Highest buzz first, one flat list across genres, at most {top_n}.)

### 1. <what is buzzing, one line>
- Genre: ...
- Buzz: likes / reposts / replies (as far as known)
- Summary: what happened and why it spread
- Representative post: summary and URL
- Reactions: direction of the response in 2-3 lines

## Article candidates
(Up to five themes worth writing about now, each with a reason.)
",
        language = language_line(Locale::Ja),
        rules = GROUND_RULES,
    )
}

/// Scout for trending posts people can act on: tips, know-how, useful services.
pub fn practical_scout(hours: u32, top_n: u32, now_iso: &str) -> String {
    format!(
        "{language}

Goal: find trending posts on Japanese X from the last {hours} hours that are practically useful,
the kind readers save and try (\"I wish I had known this sooner\").
As of: {now_iso}

Rules:
- Use x_search on Japanese-language posts.
{rules}

Exclude entirely:
- Outrage, criticism and scandal; plain breaking news; game results.
- Appearance debates; tear-jerker stories; jokes with no practical use.

Look for, in priority order:
1. Life hacks: housework, cooking, saving money, storage, cleaning, health routines
2. Work and career: productivity, time management, job changes, side work, freelancing
3. Money: tax returns, tax saving, insurance, hometown tax, points, household budgets
4. Technology: useful apps, AI usage, gadget reviews, PC and phone tips
5. Learning: study methods, certifications, English, reading, recommended books
6. Health and mental health: sleep, exercise habits, diet, stress
7. Parenting and education
8. Public programs, subsidies and free services people miss

Search strategy:
1) Posts that say they wish they had known sooner, that something saved them, or that it worked.
2) \"Everyone should know this\" style shares of methods and tips.
3) Professionals sharing know-how: doctors, lawyers, tax accountants, dietitians, insiders.

Selection:
- Most important: can a reader act on it with concrete steps?
- Is it spreading? (around 500 likes or 100 reposts as a guide; less is fine if it is good)
- Reproducible for most people, and credible. Drop unfounded health claims.
- If little qualifies, say it was a quiet period. Do not pad.

Output (Markdown):

## Practical trends
(3-5 lines of overview.)

## Topics
(Usefulness times buzz, highest first, at most {top_n}.)

### 1. <what the tip is, one line>
- Category: ...
- Buzz: likes / reposts (as far as known)
- Content: what is shared, with concrete steps or numbers
- Why it helps: ...
- To try it: the smallest first step
- Original post: URL
- Related: other URLs, if any

## Article candidates
(Up to five themes worth writing about now, each with a reason.)
",
        language = language_line(Locale::Ja),
        rules = GROUND_RULES,
    )
}

/// Daily news digest about one subject.
pub fn news_digest(
    subject: &str,
    keywords: &[String],
    hours: u32,
    categories: &[String],
    top_n: u32,
    now_iso: &str,
) -> String {
    format!(
        "{language}

Goal: collect news and talk about {subject} from X over the last {hours} hours and write today's digest.
As of: {now_iso}

Rules:
- Use x_search, combining these keywords: {keywords}
- Prefer posts with high engagement (reposts, likes, replies, quotes).
- Weigh the official accounts of {subject} and established reporters highest.
{rules}
- Keep players' honorifics; no inflammatory wording.

Categories ({count}):
{categories}

For each category, up to {top_n} items:

## <category>
### <headline>
- Summary: 1-2 sentences with the concrete facts
- Source: URL
- Why it matters: one sentence of analysis

If a category has no news, write \"No notable news\".
",
        language = language_line(Locale::Ja),
        keywords = quoted_list(keywords),
        rules = GROUND_RULES,
        count = categories.len(),
        categories = numbered(categories),
    )
}

/// Pre-writing context pack for an article.
pub fn context_research(
    topic: &str,
    locale: Locale,
    audience: Audience,
    goal: &str,
    days: u32,
    now_iso: &str,
) -> String {
    let audience_line = match audience {
        Audience::Engineer => {
            "Readers are engineers: go deep on implementation, operations and limits (rate, cost, permissions)."
        }
        Audience::Investor => {
            "Readers are investors: go deep on cost, advantage, risk and terms, without giving investment advice."
        }
        Audience::Both => {
            "Readers are engineers and investors: use shared terms (operations, reproducibility, cost, audit)."
        }
    };

    format!(
        "{language}

Goal: {goal}
Topic: {topic}
As of: {now_iso}
Search window: the last {days} days (for specs, terms and pricing, prefer the latest).

Rules:
- {scope}
- {audience_line}
{rules}
- Specs, prices and rate limits change: attach an \"As of\" date to each.
- Summarize instead of quoting at length.
- Primary Sources must be non-X URLs (docs, blogs, specs, terms, pricing, GitHub). X posts are Secondary only.

Steps:
1) With x_search, collect primary sources first.
2) Then collect implementation examples (GitHub, SDKs, samples).
3) Produce at least one counterpoint (rate limits, cost blow-up, bias, policy, security).
4) Produce at least two depth elements: definitions, dated numbers, minimal implementation setup.

Output (Markdown, all headings required):
- Meta (Timestamp, Topic, Audience)
- Topic (1 sentence)
- Why Now (3 bullets)
- Key Questions (5-8)
- Terminology / Definitions (with sources)
- Primary Sources (URL)
- Secondary Sources (URL)
- Contrasts / Counterpoints (with evidence)
- Data Points (dated, with sources)
- What We Can Safely Say / What We Should Not Say
- Suggested Angles (3)
- Outline Seeds (3-6 headings)
- Sources (URL list)
",
        language = language_line(locale),
        scope = search_scope_line(locale),
        rules = GROUND_RULES,
    )
}

/// Opinion-forming deep dive on one topic.
pub fn deep_research(topic: &str, locale: Locale, hours: u32, now_iso: &str) -> String {
    format!(
        "{language}

Goal: material for forming an opinion and writing a differentiated post.
Topic: {topic}
As of: {now_iso}
Search window: the last {hours} hours.

Rules:
- {scope}
{rules}

Steps (use x_search):
1) Collect primary sources and settle what is established fact.
2) Top 3 supportive posts, favouring engagement. One sentence on why each took off.
3) Top 3 critical posts, favouring engagement. One sentence on why each took off.
4) Find the gaps: angles nobody has taken yet, hands-on reports that are missing.

Output (Markdown):

## Topic
## Facts (with source URL and As of)
## Supportive voices (Top 3)
### <n>. <gist>
- Author: @handle
- URL: ...
- Engagement: rough likes/reposts
- Why it took off: ...
## Critical voices (Top 3)
(same structure)
## Temperature map
- Rough split of support / criticism / neutral
- Peak moment and trigger
- Whether the debate is settling or still moving
## Gaps (what nobody has said yet)
- Three angles with a reason each would land
## If you post
- One sentence on which stance would stand out
",
        language = language_line(locale),
        scope = search_scope_line(locale),
        rules = GROUND_RULES,
    )
}

/// Post drafts from a digest. The section layout is parsed back by `publish`.
pub fn post_drafts(source_text: &str, source_name: &str, now_iso: &str) -> String {
    format!(
        "{language}

Goal: write X post drafts based on the digest below.
As of: {now_iso}
Source: {source_name}

Voice:
- An expert fan's view, not a press-release account. Say why it matters and what comes next.
- Analytical but warm. At most one emoji per post.
- Use only numbers that appear in the digest.

Length: every post must fit in 280 weighted characters
(full-width characters count 2, URLs count 23). Note an estimate under each post.

## Pattern A: Single posts
Three standalone drafts, each with its own angle (news + analysis, tactics, league context).

## Pattern B: Thread
One thread of 3-5 posts: hook, topics with analysis, wrap-up, closing question.

## Pattern C: Article outline
One outline for a long-form article: three title candidates (30-60 characters),
a lead of about 200 characters and 4-6 headings. This part is not posted.

Input digest:
---
{source_text}
---

Output format (Markdown). Put every post text alone inside a fenced code block:

## Pattern A: Single posts

### Draft 1: <angle>
```
<post text>
```
- Estimated length: NN/280

(Drafts 2 and 3 the same way)

## Pattern B: Thread

### 1/N
```
<post text>
```
- Estimated length: NN/280

(every thread post the same way)

## Pattern C: Article outline

### Title candidates
1. <title>
2. <title>
3. <title>

### Lead
<about 200 characters>

### Structure
1. <heading> (one-line summary)
(4-6 headings)

### Notes
- Target length and readers
- What sets it apart from existing articles
",
        language = language_line(Locale::Ja),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<String> {
        vec!["Rust".to_string(), "Go".to_string()]
    }

    #[test]
    fn test_trend_scout_lists_categories() {
        let prompt = trend_scout(
            ScoutPreset::Engineering,
            Locale::Global,
            12,
            &categories(),
            5,
            "2026-01-01T00:00:00Z",
        );
        assert!(prompt.starts_with("Answer in English."));
        assert!(prompt.contains("last 12 hours"));
        assert!(prompt.contains("Categories (2):\n  1. Rust\n  2. Go"));
        assert!(prompt.contains("top 5 topics"));
    }

    #[test]
    fn test_anti_aging_preset() {
        let preset = ScoutPreset::AntiAging;
        let categories: Vec<String> = preset
            .default_categories()
            .iter()
            .map(|s| s.to_string())
            .collect();
        let prompt = trend_scout(preset, Locale::Ja, preset.default_hours(), &categories, 3, "now");

        assert!(prompt.contains("anti-aging and rejuvenation topics discussed on X in the last 48 hours"));
        assert!(prompt.contains("No diagnosis or treatment advice"));
        assert!(prompt.contains("- Evidence and cautions: ..."));
        assert!(prompt.contains("Categories (5):\n  1. Skincare"));
        assert!(!prompt.contains("engineers"));
    }

    #[test]
    fn test_news_digest_window() {
        let prompt = news_digest("Team", &["team".to_string()], 24, &categories(), 3, "2026-01-01T00:00:00Z");
        assert!(prompt.contains("last 24 hours"));
        assert!(prompt.contains("up to 3 items"));
    }

    #[test]
    fn test_news_digest_names_subject_and_keywords() {
        let keywords: Vec<String> = DEFAULT_NEWS_KEYWORDS.iter().map(|s| s.to_string()).collect();
        let categories: Vec<String> = DEFAULT_NEWS_CATEGORIES.iter().map(|s| s.to_string()).collect();
        let prompt = news_digest(DEFAULT_NEWS_SUBJECT, &keywords, 24, &categories, 3, "now");

        assert!(prompt.contains("news and talk about Hokkaido Nippon-Ham Fighters from X"));
        assert!(prompt.contains("official accounts of Hokkaido Nippon-Ham Fighters"));
        assert!(prompt.contains(
            "combining these keywords: \"日本ハム\", \"ファイターズ\", \"日ハム\", \"エスコンフィールド\", \"#lovefighters\", \"#日本ハム\""
        ));
    }

    #[test]
    fn test_buzz_and_practical_prompts() {
        let buzz = buzz_scout(48, 10, "now");
        assert!(buzz.starts_with("Answer in Japanese."));
        assert!(buzz.contains("in the last 48 hours, across every genre"));
        assert!(buzz.contains("at most 10."));

        let practical = practical_scout(12, 7, "now");
        assert!(practical.contains("from the last 12 hours that are practically useful"));
        assert!(practical.contains("Exclude entirely:"));
        assert!(practical.contains("at most 7."));
        assert_ne!(buzz, practical);
    }

    #[test]
    fn test_context_research_audience() {
        let prompt = context_research(
            "rate limits",
            Locale::Ja,
            Audience::Investor,
            "background",
            30,
            "2026-01-01T00:00:00Z",
        );
        assert!(prompt.contains("Topic: rate limits"));
        assert!(prompt.contains("Readers are investors"));
        assert!(prompt.contains("the last 30 days"));
    }

    #[test]
    fn test_deep_research_topic() {
        let prompt = deep_research("MCP servers", Locale::Global, 72, "now");
        assert!(prompt.contains("Topic: MCP servers"));
        assert!(prompt.contains("last 72 hours"));
    }

    #[test]
    fn test_post_drafts_layout_matches_parser() {
        let prompt = post_drafts("digest body", "digest.txt", "now");
        assert!(prompt.contains("digest body"));
        assert!(prompt.contains("## Pattern A: Single posts"));
        assert!(prompt.contains("## Pattern B: Thread"));
        assert!(prompt.contains("## Pattern C: Article outline\n\n### Title candidates"));
    }
}
