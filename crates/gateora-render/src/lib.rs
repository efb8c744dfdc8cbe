//! Rendering utilities for human-facing surfaces (Markdown, plain-text copy report).

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod text;

pub use markdown::render_markdown;
pub use model::{
    RenderableDisplay, RenderablePolicy, RenderableReason, RenderableReport, RenderableVerdict,
};
pub use text::render_text;
