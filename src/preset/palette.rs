//! Color palette for one theme mode.

/// The color set a preset uses in one mode (light or dark).
///
/// Every field is an opaque CSS value passed through to the generated
/// stylesheet untouched. `background` may be a solid color or a full
/// gradient expression; nothing here validates CSS syntax - a bad value
/// is the rendering engine's problem, not ours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    /// Page background. Solid color or gradient expression.
    pub background: &'static str,
    /// Body text color.
    pub foreground: &'static str,
    /// Background for code spans and fenced blocks.
    pub code_background: &'static str,
    /// Text color inside code spans and fenced blocks.
    pub code_foreground: &'static str,
    /// Rule, table and blockquote border color.
    pub border: &'static str,
    /// Link color.
    pub link: &'static str,
    /// Link color on hover.
    pub link_hover: &'static str,
}

impl ThemePalette {
    /// Returns `(variable name, value)` pairs in declaration order.
    ///
    /// The compositor emits `:root` variables and the dark-mode override
    /// block from this same list, so the two blocks always agree on names
    /// and ordering.
    pub fn variables(&self) -> [(&'static str, &'static str); 7] {
        [
            ("--background", self.background),
            ("--foreground", self.foreground),
            ("--code-background", self.code_background),
            ("--code-foreground", self.code_foreground),
            ("--border", self.border),
            ("--link", self.link),
            ("--link-hover", self.link_hover),
        ]
    }
}
