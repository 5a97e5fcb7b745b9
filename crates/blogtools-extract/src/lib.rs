//! blogtools-extract
//!
//! Turns a blog URL into a readable article plus a summary of the site's
//! visual style.

pub mod article;
pub mod error;
pub mod fetch;
pub mod style;

use blogtools_core::models::article::Article;
use blogtools_core::models::style::StyleSummary;
use url::Url;

use crate::error::ExtractError;
use crate::fetch::PageFetcher;

/// Everything extracted from one page.
#[derive(Debug, Clone)]
pub struct ExtractedPage {
    pub article: Article,
    pub style: StyleSummary,
}

/// Parse a user-supplied URL, accepting only absolute `http(s)` URLs.
pub fn parse_page_url(raw: &str) -> Result<Url, ExtractError> {
    let url = Url::parse(raw.trim()).map_err(|e| ExtractError::InvalidUrl(format!("{raw}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ExtractError::InvalidUrl(format!(
            "{raw}: unsupported scheme {other}"
        ))),
    }
}

/// Fetch a page once and extract both the article and the style summary
/// from the same HTML.
pub async fn extract_page(fetcher: &PageFetcher, url: &Url) -> Result<ExtractedPage, ExtractError> {
    let html = fetcher.fetch(url).await?;

    let article = article::extract_article(&html, url)?;
    let style = style::extract_style(&html);

    tracing::info!(
        url = %url,
        title = %article.title,
        text_len = article.content.len(),
        style_properties = style.non_empty().len(),
        "page extracted"
    );

    Ok(ExtractedPage { article, style })
}
