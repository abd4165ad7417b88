// src/reporting/markdown.rs
//! Small Markdown building blocks used by the composer.

pub const DEFAULT_IMAGE_ALIGN: &str = "bottom";
pub const DEFAULT_IMAGE_WIDTH: u32 = 20;

/// Wraps content in a fenced code block with a language tag.
#[must_use]
pub fn code_block(content: &str, lang: &str) -> String {
    format!("```{lang}\n{content}\n```")
}

/// Builds a collapsible details block.
#[must_use]
pub fn details(summary: &str, body: &str) -> String {
    format!("<details>\n<summary>{summary}</summary>\n\n{body}\n\n</details>")
}

/// Inline image markup with the default alignment and width.
#[must_use]
pub fn image(src: &str, alt: &str) -> String {
    image_with(src, alt, DEFAULT_IMAGE_ALIGN, DEFAULT_IMAGE_WIDTH)
}

/// Inline image markup with explicit alignment and width.
#[must_use]
pub fn image_with(src: &str, alt: &str, align: &str, width: u32) -> String {
    format!("<img src=\"{src}\" alt=\"{alt}\" align=\"{align}\" width=\"{width}\">")
}
