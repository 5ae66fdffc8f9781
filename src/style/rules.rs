//! Fixed CSS rule blocks shared by every preset.

/// Structural rules that never vary by preset or theme.
///
/// Everything color- or font-dependent goes through the custom properties
/// declared by the compositor's `:root` block, so this text can stay a
/// single constant.
pub const SHARED_RULES: &str = r#"* {
  box-sizing: border-box;
}

body {
  margin: 0 auto;
  padding: 3rem 1.5rem 6rem;
  max-width: 72ch;
  background: var(--background);
  color: var(--foreground);
  line-height: 1.6;
}

h1, h2, h3, h4, h5, h6 {
  margin: 2rem 0 0.75rem;
  line-height: 1.25;
}

h1 {
  font-size: 2rem;
  margin-top: 0;
}

h2 {
  font-size: 1.5rem;
  border-bottom: 1px solid var(--border);
  padding-bottom: 0.3rem;
}

h3 {
  font-size: 1.25rem;
}

p, ul, ol, dl {
  margin: 0 0 1rem;
}

ul, ol {
  padding-left: 1.75rem;
}

li + li {
  margin-top: 0.25rem;
}

a {
  color: var(--link);
  text-decoration: underline;
  text-underline-offset: 2px;
}

a:hover {
  color: var(--link-hover);
}

code {
  background: var(--code-background);
  color: var(--code-foreground);
  border-radius: 4px;
  padding: 0.15em 0.35em;
  font-size: 0.9em;
}

pre {
  background: var(--code-background);
  color: var(--code-foreground);
  border: 1px solid var(--border);
  border-radius: 6px;
  padding: 1rem;
  overflow-x: auto;
  margin: 0 0 1rem;
}

pre code {
  background: none;
  padding: 0;
  font-size: 0.875em;
}

blockquote {
  margin: 0 0 1rem;
  padding: 0.25rem 1rem;
  border-left: 4px solid var(--border);
  opacity: 0.9;
}

hr {
  border: none;
  border-top: 1px solid var(--border);
  margin: 2rem 0;
}

table {
  border-collapse: collapse;
  margin: 0 0 1rem;
  width: 100%;
}

th, td {
  border: 1px solid var(--border);
  padding: 0.4rem 0.75rem;
  text-align: left;
}

th {
  background: var(--code-background);
}

img, video {
  max-width: 100%;
  height: auto;
}"#;

/// Binds the element selectors to the font variables from `:root`.
pub const TYPOGRAPHY_RULES: &str = r#"body {
  font-family: var(--font-body);
}

h1, h2, h3, h4, h5, h6 {
  font-family: var(--font-heading);
}

code, pre, kbd, samp {
  font-family: var(--font-mono);
}"#;
