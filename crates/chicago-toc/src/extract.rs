//! Heading extraction from Markdown.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

use crate::TocNode;
use crate::slug::Slugger;

/// Deepest heading level Markdown supports.
pub const MAX_HEADING_LEVEL: u8 = 6;

/// Build a table of contents from Markdown headings up to `max_level`.
///
/// Each heading is nested under the closest preceding heading of a
/// shallower level. Anchors are assigned to every heading, including the
/// ones deeper than `max_level`, so they match the ids on the rendered page.
#[must_use]
pub fn extract_toc(markdown: &str, max_level: u8) -> Vec<TocNode> {
    let mut slugger = Slugger::new();
    let mut headings = Vec::new();
    let mut current: Option<(u8, String)> = None;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some((heading_level_to_num(level), String::new()));
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, title)) = current.as_mut() {
                    title.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, title)) = current.take() {
                    let title = title.trim();
                    let id = slugger.slug(title);
                    if level <= max_level {
                        headings.push((level, TocNode::new(title, format!("#{id}"))));
                    }
                }
            }
            _ => {}
        }
    }

    nest(headings)
}

/// Turn a flat, leveled heading list into a tree.
fn nest(headings: Vec<(u8, TocNode)>) -> Vec<TocNode> {
    let mut roots = Vec::new();
    let mut stack: Vec<(u8, TocNode)> = Vec::new();

    for (level, node) in headings {
        while stack.last().is_some_and(|(open, _)| *open >= level) {
            close_top(&mut stack, &mut roots);
        }
        stack.push((level, node));
    }
    while !stack.is_empty() {
        close_top(&mut stack, &mut roots);
    }

    roots
}

fn close_top(stack: &mut Vec<(u8, TocNode)>, roots: &mut Vec<TocNode>) {
    let Some((_, node)) = stack.pop() else {
        return;
    };
    match stack.last_mut() {
        Some((_, parent)) => parent.items.push(node),
        None => roots.push(node),
    }
}

fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn titles(items: &[TocNode]) -> Vec<&str> {
        items.iter().map(|item| item.title.as_str()).collect()
    }

    #[test]
    fn test_extract_nested_headings() {
        let markdown = "## Install\n\n### Linux\n\n### macOS\n\n## Configure\n";
        let toc = extract_toc(markdown, MAX_HEADING_LEVEL);

        assert_eq!(titles(&toc), vec!["Install", "Configure"]);
        assert_eq!(titles(&toc[0].items), vec!["Linux", "macOS"]);
        assert_eq!(toc[0].url, "#install");
        assert_eq!(toc[0].items[1].url, "#macos");
    }

    #[test]
    fn test_extract_respects_max_level() {
        let markdown = "## Install\n\n### Linux\n\n#### Debian\n";
        let toc = extract_toc(markdown, 3);

        assert_eq!(toc[0].items[0].title, "Linux");
        assert!(toc[0].items[0].items.is_empty());
    }

    #[test]
    fn test_extract_skipped_level_nests_under_nearest() {
        let markdown = "## Usage\n\n#### Flags\n\n### Examples\n";
        let toc = extract_toc(markdown, MAX_HEADING_LEVEL);

        assert_eq!(titles(&toc[0].items), vec!["Flags", "Examples"]);
    }

    #[test]
    fn test_extract_deeper_first_heading_is_root() {
        let markdown = "### Note\n\n## Overview\n";
        let toc = extract_toc(markdown, MAX_HEADING_LEVEL);
        assert_eq!(titles(&toc), vec!["Note", "Overview"]);
    }

    #[test]
    fn test_extract_inline_code_and_duplicates() {
        let markdown = "## Run `chicago`\n\n## FAQ\n\n## FAQ\n";
        let toc = extract_toc(markdown, MAX_HEADING_LEVEL);

        assert_eq!(toc[0].title, "Run chicago");
        assert_eq!(toc[0].url, "#run-chicago");
        assert_eq!(toc[2].url, "#faq-1");
    }

    #[test]
    fn test_hidden_headings_still_reserve_ids() {
        let markdown = "## Setup\n\n### Setup\n\n## Setup\n";
        let toc = extract_toc(markdown, 2);

        let urls: Vec<_> = toc.iter().map(|item| item.url.as_str()).collect();
        assert_eq!(urls, vec!["#setup", "#setup-2"]);
    }

    #[test]
    fn test_extract_without_headings() {
        assert!(extract_toc("Just a paragraph.", MAX_HEADING_LEVEL).is_empty());
    }
}
