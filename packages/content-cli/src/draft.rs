//! Parsing of generated post-draft markdown.
//!
//! A draft has a "Pattern A" section with standalone posts and a "Pattern B"
//! section with one thread. Every post sits in its own fenced code block. An
//! optional "Pattern C" section holds an article outline, kept as raw text and
//! never posted.

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Draft {
    pub singles: Vec<String>,
    pub thread: Vec<String>,
    pub outline: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Singles,
    Thread,
    Outline,
}

fn section_heading(line: &str) -> Option<Section> {
    let heading = line.strip_prefix("## ")?;
    if heading.starts_with("Pattern A") || heading.starts_with("パターンA") {
        Some(Section::Singles)
    } else if heading.starts_with("Pattern B") || heading.starts_with("パターンB") {
        Some(Section::Thread)
    } else if heading.starts_with("Pattern C") || heading.starts_with("パターンC") {
        Some(Section::Outline)
    } else {
        None
    }
}

fn is_fence(line: &str) -> bool {
    line.trim_start().starts_with("```")
}

/// Extract single posts, thread posts and the article outline from a draft.
pub fn parse_draft(content: &str) -> Draft {
    let mut draft = Draft::default();
    let mut section: Option<Section> = None;
    let mut block: Option<Vec<&str>> = None;
    let mut outline: Vec<&str> = Vec::new();
    let mut outline_fenced = false;

    for line in content.lines() {
        if section == Some(Section::Outline) {
            if is_fence(line) {
                outline_fenced = !outline_fenced;
            } else if !outline_fenced {
                if let Some(next) = section_heading(line) {
                    section = Some(next);
                    continue;
                }
            }
            outline.push(line);
            continue;
        }

        if is_fence(line) {
            match block.take() {
                None => block = Some(Vec::new()),
                Some(lines) => {
                    let text = lines.join("\n").trim().to_string();
                    match section {
                        Some(_) if text.is_empty() => {}
                        Some(Section::Singles) => draft.singles.push(text),
                        Some(Section::Thread) => draft.thread.push(text),
                        Some(Section::Outline) | None => {}
                    }
                }
            }
            continue;
        }

        match block.as_mut() {
            Some(lines) => lines.push(line),
            None => {
                if let Some(next) = section_heading(line) {
                    section = Some(next);
                    outline_fenced = false;
                }
            }
        }
    }

    let outline = outline.join("\n").trim().to_string();
    if !outline.is_empty() {
        draft.outline = Some(outline);
    }

    draft
}
