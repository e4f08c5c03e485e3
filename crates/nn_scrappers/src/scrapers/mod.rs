use async_trait::async_trait;
use nn_core::{RawArticle, Result};

pub mod korea;

pub use korea::NaverScraper;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceMetadata {
    pub name: &'static str,
    pub emoji: &'static str,
}

#[async_trait]
pub trait Scraper: Send + Sync {
    /// Returns the name and display emoji of the news source
    fn source_metadata(&self) -> SourceMetadata;

    /// Fetches one article page and extracts its fields.
    /// Fails as a whole if the page cannot be retrieved; missing fields are `None`.
    async fn scrape_article(&self, url: &str) -> Result<RawArticle>;
}

/// Common utilities for scrapers
pub(crate) mod utils {
    use nn_core::{Error, Result};
    use scraper::{ElementRef, Html, Selector};

    /// Text under these tags is never rendered.
    const HIDDEN_TAGS: [&str; 3] = ["script", "style", "template"];

    pub fn parse_selector(selector: &str) -> Result<Selector> {
        Selector::parse(selector)
            .map_err(|e| Error::Scraping(format!("Invalid selector {}: {}", selector, e)))
    }

    /// Visible text segments of `element`, each trimmed, empty ones dropped,
    /// joined with `separator`.
    pub fn visible_text(element: ElementRef<'_>, separator: &str) -> String {
        element
            .descendants()
            .filter_map(|node| {
                let text = node.value().as_text()?;
                let hidden = node
                    .ancestors()
                    .filter_map(|ancestor| ancestor.value().as_element())
                    .any(|el| HIDDEN_TAGS.contains(&el.name()));
                (!hidden).then_some(&**text)
            })
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Text of the first element matching `selector`, or `None` if nothing matches.
    pub fn extract_text(document: &Html, selector: &str, separator: &str) -> Result<Option<String>> {
        let selector = parse_selector(selector)?;
        Ok(document
            .select(&selector)
            .next()
            .map(|el| visible_text(el, separator)))
    }
}
