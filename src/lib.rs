//! # mdlook - themed Markdown previews
//!
//! mdlook turns a Markdown file into a single styled HTML document and
//! shows it in your browser. It provides:
//!
//! - **Style presets** - named font/palette bundles picked with `--style`
//! - **Light/dark/auto themes** - `auto` layers light-first with a
//!   dark-mode media query, so the viewer's preference decides
//! - **Deterministic CSS composition** - one stylesheet assembled from
//!   fixed, ordered blocks
//! - **Template assembly** with MiniJinja and a single embedded page
//!   template
//!
//! ## Pipeline
//!
//! [`preset::resolve_preset`] → [`theme::resolve_theme`] →
//! [`style::compose_css`] → [`render::assemble_document`]
//!
//! ## Quick Start
//!
//! ```rust
//! use mdlook::preset::resolve_preset;
//! use mdlook::render::{assemble_document, derive_title, markdown_to_html};
//! use mdlook::style::compose_css;
//! use mdlook::theme::{resolve_theme, ThemePreference};
//!
//! let source = "# Hello\n\nSome *Markdown* text.\n";
//! let preset = resolve_preset("github").unwrap();
//! let resolved = resolve_theme(preset, ThemePreference::Auto);
//!
//! let css = compose_css(preset, &resolved);
//! let body = markdown_to_html(source);
//! let title = derive_title(source, std::path::Path::new("hello.md"));
//!
//! let html = assemble_document(
//!     &title, &body, &css, resolved.color_scheme, preset, source,
//! ).unwrap();
//! assert!(html.contains("<title>Hello</title>"));
//! ```

pub mod cli;
pub mod preset;
pub mod render;
pub mod style;
pub mod theme;

pub use preset::{resolve_preset, StylePreset, ThemePalette};
pub use style::compose_css;
pub use theme::{resolve_theme, ResolvedTheme, ThemePreference};
