//! Final HTML document assembly.

use minijinja::Environment;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::preset::StylePreset;

use super::markdown::has_mermaid_fence;

/// The fixed page template, embedded at build time.
const PAGE_TEMPLATE: &str = include_str!("../../templates/page.html");

const PAGE_TEMPLATE_NAME: &str = "page.html";

/// Script snippet injected at the end of the body when the source
/// contains Mermaid fences. Rewrites the parser's
/// `<code class="language-mermaid">` blocks into the form mermaid.js
/// expects, then renders them.
const MERMAID_BODY_SCRIPT: &str = r#"<script type="module">
      import mermaid from "https://cdn.jsdelivr.net/npm/mermaid@10/dist/mermaid.esm.min.mjs";
      document.querySelectorAll("pre > code.language-mermaid").forEach((code) => {
        const holder = document.createElement("pre");
        holder.className = "mermaid";
        holder.textContent = code.textContent;
        code.parentElement.replaceWith(holder);
      });
      mermaid.initialize({ startOnLoad: false });
      mermaid.run({ querySelector: ".mermaid" });
    </script>"#;

// Compiled once per process; later renders reuse the same environment.
// The template name ends in .html so minijinja auto-escapes everything
// not explicitly piped through `safe`.
static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)
        .expect("embedded page template is valid");
    env
});

#[derive(Serialize)]
struct PageContext<'a> {
    title: &'a str,
    body: &'a str,
    css: &'a str,
    font_imports: String,
    color_scheme: &'a str,
    head_scripts: &'a str,
    body_scripts: &'a str,
}

/// Substitutes the rendered body, composed CSS and preset metadata into
/// the page template.
///
/// `source` is the raw Markdown text, consulted only for the Mermaid
/// fence scan. The title is escaped by the template engine; body, CSS,
/// font imports and scripts are embedded verbatim.
///
/// # Errors
///
/// Returns a template error if substitution fails.
pub fn assemble_document(
    title: &str,
    body: &str,
    css: &str,
    color_scheme: &str,
    preset: &StylePreset,
    source: &str,
) -> Result<String, minijinja::Error> {
    let body_scripts = if has_mermaid_fence(source) {
        MERMAID_BODY_SCRIPT
    } else {
        ""
    };

    let context = PageContext {
        title,
        body,
        css,
        font_imports: preset.font_imports.join("\n    "),
        color_scheme,
        head_scripts: "",
        body_scripts,
    };

    let template = TEMPLATES.get_template(PAGE_TEMPLATE_NAME)?;
    template.render(&context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::resolve_preset;

    fn assemble(preset_id: &str, title: &str, source: &str) -> String {
        let preset = resolve_preset(preset_id).unwrap();
        let body = crate::render::markdown_to_html(source);
        assemble_document(title, &body, "body { margin: 0; }", "light dark", preset, source)
            .unwrap()
    }

    #[test]
    fn test_document_contains_title_and_body() {
        let html = assemble("github", "My Notes", "# Hi\n\nHello there.\n");
        assert!(html.contains("<title>My Notes</title>"));
        assert!(html.contains("<h1>Hi</h1>"));
        assert!(html.contains("Hello there."));
    }

    #[test]
    fn test_title_is_escaped_but_body_is_not() {
        let html = assemble("github", "a < b", "*em*\n");
        assert!(html.contains("<title>a &lt; b</title>"));
        assert!(html.contains("<em>em</em>"));
    }

    #[test]
    fn test_css_lands_inside_style_tag() {
        let html = assemble("github", "t", "x\n");
        let style_start = html.find("<style>").unwrap();
        let style_end = html.find("</style>").unwrap();
        assert!(html[style_start..style_end].contains("body { margin: 0; }"));
    }

    #[test]
    fn test_color_scheme_meta() {
        let html = assemble("github", "t", "x\n");
        assert!(html.contains(r#"<meta name="color-scheme" content="light dark">"#));
    }

    #[test]
    fn test_font_imports_embedded_in_order() {
        let preset = resolve_preset("manuscript").unwrap();
        let html = assemble("manuscript", "t", "x\n");
        let mut last = 0;
        for import in preset.font_imports {
            let at = html.find(import).expect("import present");
            assert!(at >= last, "imports out of order");
            last = at;
        }
    }

    #[test]
    fn test_mermaid_script_only_with_fence() {
        let with = assemble("github", "t", "```mermaid\ngraph TD;\n```\n");
        let without = assemble("github", "t", "```rust\nfn main() {}\n```\n");
        assert!(with.contains("mermaid.esm.min.mjs"));
        assert!(!without.contains("mermaid"));
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let a = assemble("terminal", "t", "# Hi\n");
        let b = assemble("terminal", "t", "# Hi\n");
        assert_eq!(a, b);
    }
}
