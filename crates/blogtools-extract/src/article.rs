use scraper::{Html, Selector};
use url::Url;

use blogtools_core::models::article::Article;

use crate::error::ExtractError;

/// Run readability over a page and keep the main article.
///
/// Fails with [`ExtractError::EmptyContent`] when no text survives. The
/// title falls back to `<title>`, then the first `<h1>`, then the URL.
pub fn extract_article(html: &str, url: &Url) -> Result<Article, ExtractError> {
    let product = readability::extractor::extract(&mut html.as_bytes(), url)
        .map_err(|e| ExtractError::Readability(format!("{e:?}")))?;

    let text = product.text.trim();
    if text.is_empty() {
        return Err(ExtractError::EmptyContent {
            url: url.to_string(),
        });
    }

    let title = match product.title.trim() {
        "" => fallback_title(html).unwrap_or_else(|| url.to_string()),
        title => title.to_string(),
    };

    Ok(Article {
        title,
        content: text.to_string(),
        html: product.content,
    })
}

fn fallback_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    ["title", "h1"].iter().find_map(|css| {
        let selector = Selector::parse(css).ok()?;
        let text = document
            .select(&selector)
            .next()?
            .text()
            .collect::<String>();
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    })
}
