//! Markdown changelog rendering.

pub mod format;

pub use format::format_pr_line;
