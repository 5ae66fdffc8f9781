//! Assembles the final stylesheet from its ordered blocks.

use std::fmt::Write;

use crate::preset::{StylePreset, ThemePalette};
use crate::theme::ResolvedTheme;

use super::rules::{SHARED_RULES, TYPOGRAPHY_RULES};

/// Builds the complete CSS document for a preset under a resolved theme.
///
/// Block order is fixed: `:root` variables, the optional dark-mode media
/// block, shared layout rules, typography rules, then the preset's extra
/// CSS verbatim. Empty blocks are dropped rather than emitted empty, and
/// the survivors join with one blank line, so identical inputs always
/// yield byte-identical output.
///
/// # Example
///
/// ```rust
/// use mdlook::preset::resolve_preset;
/// use mdlook::style::compose_css;
/// use mdlook::theme::{resolve_theme, ThemePreference};
///
/// let preset = resolve_preset("github").unwrap();
/// let resolved = resolve_theme(preset, ThemePreference::Auto);
/// let css = compose_css(preset, &resolved);
/// assert!(css.starts_with(":root {"));
/// assert!(css.contains("@media (prefers-color-scheme: dark)"));
/// ```
pub fn compose_css(preset: &StylePreset, resolved: &ResolvedTheme<'_>) -> String {
    let mut blocks: Vec<String> = Vec::new();

    blocks.push(root_block(preset, resolved));
    if let Some(dark) = resolved.dark_override {
        blocks.push(dark_override_block(dark));
    }
    blocks.push(SHARED_RULES.to_string());
    blocks.push(TYPOGRAPHY_RULES.to_string());
    if let Some(extra) = preset.extra_css {
        let extra = extra.trim();
        if !extra.is_empty() {
            blocks.push(extra.to_string());
        }
    }

    blocks.join("\n\n")
}

/// The `:root` block: color-scheme hint, palette variables from the base
/// (static) palette, then the three font variables with fallbacks applied.
fn root_block(preset: &StylePreset, resolved: &ResolvedTheme<'_>) -> String {
    let mut out = String::new();
    out.push_str(":root {\n");
    let _ = writeln!(out, "  color-scheme: {};", resolved.color_scheme);
    for (name, value) in resolved.base.variables() {
        let _ = writeln!(out, "  {}: {};", name, value);
    }
    let _ = writeln!(out, "  --font-body: {};", preset.font_family);
    let _ = writeln!(out, "  --font-heading: {};", preset.heading_font());
    let _ = writeln!(out, "  --font-mono: {};", preset.mono_font());
    out.push('}');
    out
}

/// Re-declares the seven palette variables (never the font variables)
/// behind the dark-mode media condition.
fn dark_override_block(dark: &ThemePalette) -> String {
    let mut out = String::new();
    out.push_str("@media (prefers-color-scheme: dark) {\n  :root {\n");
    for (name, value) in dark.variables() {
        let _ = writeln!(out, "    {}: {};", name, value);
    }
    out.push_str("  }\n}");
    out
}
