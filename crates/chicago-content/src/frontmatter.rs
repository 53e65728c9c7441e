//! YAML frontmatter parsing.

use serde::Deserialize;

/// Fields read from a document's frontmatter block.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct Frontmatter {
    pub title: Option<String>,
    pub short_title: Option<String>,
    pub description: Option<String>,
    pub show_breadcrumb: Option<bool>,
    pub show_post_nav: Option<bool>,
    pub show_sidebar: Option<bool>,
    #[serde(rename = "showTOC")]
    pub show_toc: Option<bool>,
}

/// Split a leading `---` delimited block from the body.
///
/// Returns `None` for the block when the content has no complete frontmatter.
pub(crate) fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return (None, content);
    };

    let end = if rest.starts_with("---") {
        Some(0)
    } else {
        rest.find("\n---").map(|idx| idx + 1)
    };
    let Some(end) = end else {
        return (None, content);
    };

    let yaml = &rest[..end];
    let after = &rest[end + 3..];
    let body = after.split_once('\n').map_or("", |(_, body)| body);
    (Some(yaml), body)
}

/// Parse frontmatter YAML. An empty block yields the defaults.
pub(crate) fn parse_frontmatter(yaml: &str) -> Result<Frontmatter, serde_yaml::Error> {
    let trimmed = yaml.trim();
    if trimmed.is_empty() {
        return Ok(Frontmatter::default());
    }
    serde_yaml::from_str(trimmed)
}
