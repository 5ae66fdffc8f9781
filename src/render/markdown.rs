//! Markdown to HTML conversion.

use pulldown_cmark::{html, Options, Parser};

/// Parser extensions enabled for previews.
fn parser_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);
    options
}

/// Converts Markdown source to an HTML fragment.
pub fn markdown_to_html(source: &str) -> String {
    let parser = Parser::new_ext(source, parser_options());
    let mut body = String::with_capacity(source.len() * 2);
    html::push_html(&mut body, parser);
    body
}

/// Reports whether the source contains a fenced code block labeled as
/// Mermaid diagram syntax.
///
/// This is a plain fence-marker scan, not Markdown parsing: a line whose
/// leading non-whitespace starts with a backtick or tilde fence followed
/// by `mermaid` counts.
pub fn has_mermaid_fence(source: &str) -> bool {
    source.lines().any(|line| {
        let line = line.trim_start();
        let info = line
            .strip_prefix("```")
            .or_else(|| line.strip_prefix("~~~"));
        match info {
            Some(info) => info.trim_start_matches(['`', '~']).trim() == "mermaid",
            None => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_basic_elements() {
        let html = markdown_to_html("# Title\n\nSome *emphasis* and a [link](https://x.y).\n");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>emphasis</em>"));
        assert!(html.contains(r#"<a href="https://x.y">link</a>"#));
    }

    #[test]
    fn test_markdown_tables_enabled() {
        let html = markdown_to_html("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_markdown_strikethrough_and_tasklists() {
        let html = markdown_to_html("~~gone~~\n\n- [x] done\n- [ ] todo\n");
        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains("checkbox"));
    }

    #[test]
    fn test_markdown_fenced_code() {
        let html = markdown_to_html("```rust\nfn main() {}\n```\n");
        assert!(html.contains("<pre>"));
        assert!(html.contains("language-rust"));
    }

    #[test]
    fn test_mermaid_fence_detected() {
        assert!(has_mermaid_fence("text\n\n```mermaid\ngraph TD;\n```\n"));
        assert!(has_mermaid_fence("~~~mermaid\nsequenceDiagram\n~~~\n"));
        assert!(has_mermaid_fence("  ```mermaid\ngraph LR;\n```\n"));
    }

    #[test]
    fn test_mermaid_fence_absent() {
        assert!(!has_mermaid_fence("# No diagrams here\n"));
        assert!(!has_mermaid_fence("```rust\nlet mermaid = 1;\n```\n"));
        assert!(!has_mermaid_fence("mermaid without a fence\n"));
    }
}
