//! Document title derivation.

use std::path::Path;

/// Title used when neither the source nor its filename offers one.
pub const DEFAULT_TITLE: &str = "Markdown Preview";

/// Derives the document title.
///
/// The first line that is a level-1 ATX heading wins, trimmed. Otherwise
/// the source file's stem is used, and when that is empty too (stdin-like
/// paths, extension-only names) a fixed default applies.
pub fn derive_title(source: &str, path: &Path) -> String {
    if let Some(heading) = first_h1(source) {
        return heading;
    }
    match path.file_stem() {
        Some(stem) if !stem.is_empty() => stem.to_string_lossy().into_owned(),
        _ => DEFAULT_TITLE.to_string(),
    }
}

/// Scans for the first `# ...` line and returns its trimmed text.
fn first_h1(source: &str) -> Option<String> {
    for line in source.lines() {
        let line = line.trim_start();
        if let Some(rest) = line.strip_prefix("# ") {
            let text = rest.trim();
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_first_h1_wins() {
        let title = derive_title("# Hello World\n\nbody\n", Path::new("notes.md"));
        assert_eq!(title, "Hello World");
    }

    #[test]
    fn test_h1_is_whitespace_trimmed() {
        let title = derive_title("#   Padded Title   \n", Path::new("notes.md"));
        assert_eq!(title, "Padded Title");
    }

    #[test]
    fn test_later_h1_found_after_prose() {
        let title = derive_title("intro paragraph\n\n# Real Title\n", Path::new("notes.md"));
        assert_eq!(title, "Real Title");
    }

    #[test]
    fn test_h2_is_not_a_title() {
        let title = derive_title("## Section\n", Path::new("notes.md"));
        assert_eq!(title, "notes");
    }

    #[test]
    fn test_hash_without_space_is_not_a_title() {
        let title = derive_title("#hashtag\n", Path::new("notes.md"));
        assert_eq!(title, "notes");
    }

    #[test]
    fn test_falls_back_to_file_stem() {
        let title = derive_title("plain text only\n", Path::new("dir/meeting-notes.md"));
        assert_eq!(title, "meeting-notes");
    }

    #[test]
    fn test_falls_back_to_default_when_no_stem() {
        assert_eq!(derive_title("plain\n", Path::new("")), DEFAULT_TITLE);
    }

    #[test]
    fn test_empty_source_uses_stem() {
        assert_eq!(derive_title("", Path::new("todo.md")), "todo");
    }
}
