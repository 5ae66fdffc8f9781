//! Markdown rendering and document assembly.
//!
//! This module provides:
//!
//! - [`markdown_to_html`]: Markdown to HTML fragment conversion
//! - [`derive_title`]: heading / filename / default title chain
//! - [`assemble_document`]: template substitution into the final page
//! - [`has_mermaid_fence`]: fence-marker scan for diagram support

mod document;
mod markdown;
mod title;

pub use document::assemble_document;
pub use markdown::{has_mermaid_fence, markdown_to_html};
pub use title::{derive_title, DEFAULT_TITLE};
