//! GitHub-style heading anchors.

use std::collections::HashMap;

/// Generates unique heading ids within one document.
///
/// Ids are lowercased, spaces become `-` and punctuation is dropped.
/// Repeated ids get a `-1`, `-2`, ... suffix.
#[derive(Debug, Default)]
pub struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Unique id for `text`.
    pub fn slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut candidate = base.clone();
        if let Some(&count) = self.seen.get(&base) {
            let mut suffix = count;
            loop {
                suffix += 1;
                candidate = format!("{base}-{suffix}");
                if !self.seen.contains_key(&candidate) {
                    break;
                }
            }
            self.seen.insert(base, suffix);
        }
        self.seen.insert(candidate.clone(), 0);
        candidate
    }
}

fn slugify(text: &str) -> String {
    text.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .filter_map(|c| match c {
            c if c.is_alphanumeric() || c == '-' || c == '_' => Some(c),
            c if c.is_whitespace() => Some('-'),
            _ => None,
        })
        .collect()
}
