//! URL path helpers shared by menu building and lookups.

/// Collapse every run of consecutive `/` into a single `/`.
///
/// # Examples
///
/// ```
/// use chicago_menu::normalize_path;
///
/// assert_eq!(normalize_path("//guides///setup/"), "/guides/setup/");
/// assert_eq!(normalize_path(""), "");
/// ```
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let mut result = String::with_capacity(path.len());
    let mut previous_slash = false;
    for c in path.chars() {
        let is_slash = c == '/';
        if !(is_slash && previous_slash) {
            result.push(c);
        }
        previous_slash = is_slash;
    }
    result
}

/// Whether the path points at an in-page anchor.
#[must_use]
pub fn has_fragment(path: &str) -> bool {
    path.contains('#')
}

/// Segments of a directory-style path (`/a/b/` yields `["a", "b"]`).
pub(crate) fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Join a parent path and a segment into a normalized directory path.
pub(crate) fn child_path(parent: &str, slug: &str) -> String {
    normalize_path(&format!("{parent}/{slug}/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_collapses_runs() {
        assert_eq!(normalize_path("/docs//guides////intro/"), "/docs/guides/intro/");
    }

    #[test]
    fn test_normalize_path_leaves_clean_path() {
        assert_eq!(normalize_path("/guides/intro/"), "/guides/intro/");
    }

    #[test]
    fn test_normalize_path_only_separators() {
        assert_eq!(normalize_path("////"), "/");
    }

    #[test]
    fn test_normalize_path_is_idempotent() {
        let samples = ["", "/", "//", "a//b", "/x///y//z/", "#//frag", "no-slashes"];
        for sample in samples {
            let once = normalize_path(sample);
            assert!(!once.contains("//"), "{sample:?} -> {once:?}");
            assert_eq!(normalize_path(&once), once);
        }
    }

    #[test]
    fn test_has_fragment() {
        assert!(has_fragment("/guides/intro/#install"));
        assert!(has_fragment("#top"));
        assert!(!has_fragment("/guides/intro/"));
    }

    #[test]
    fn test_path_segments() {
        let segments: Vec<_> = path_segments("/guides/setup/").collect();
        assert_eq!(segments, vec!["guides", "setup"]);
        assert_eq!(path_segments("/").count(), 0);
    }

    #[test]
    fn test_child_path() {
        assert_eq!(child_path("/", "guides"), "/guides/");
        assert_eq!(child_path("/guides/", "setup"), "/guides/setup/");
        assert_eq!(child_path("/guides/", ""), "/guides/");
    }
}
