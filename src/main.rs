//! `bookmark-html-converter`: turns a browser's bookmark export into JSON or Markdown.
//!
//! All work happens in [`bookmark_html_converter::interface::cli::run`]; errors come
//! back as `anyhow` chains so the process exits non-zero with the full cause.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    bookmark_html_converter::interface::cli::run().await
}
