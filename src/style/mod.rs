//! Stylesheet composition.
//!
//! This module provides:
//!
//! - [`compose_css`]: ordered assembly of the final CSS document
//! - [`SHARED_RULES`] / [`TYPOGRAPHY_RULES`]: the fixed rule blocks
//!
//! The compositor consumes a [`ResolvedTheme`](crate::theme::ResolvedTheme)
//! and never decides palette layering itself.

mod compositor;
mod rules;

pub use compositor::compose_css;
pub use rules::{SHARED_RULES, TYPOGRAPHY_RULES};
