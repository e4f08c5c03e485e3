use std::sync::Arc;
use nn_core::{ArticleRecord, ArticleStorage, Result};
use crate::logging::Logger;
use crate::scrapers::Scraper;

type BoxedScraper = Box<dyn Scraper>;

/// Runs one scraper over a list of URLs and hands the batch to storage.
pub struct ScraperManager {
    scraper: BoxedScraper,
    storage: Arc<dyn ArticleStorage>,
    logger: Logger,
}

impl ScraperManager {
    pub fn new(scraper: BoxedScraper, storage: Arc<dyn ArticleStorage>) -> Self {
        let meta = scraper.source_metadata();
        let logger = Logger::new().with_prefix(format!("{} {}", meta.emoji, meta.name));
        Self {
            scraper,
            storage,
            logger,
        }
    }

    /// Fetches every URL in order, one at a time. The first failure aborts the
    /// whole batch and nothing is returned.
    pub async fn crawl(&self, urls: &[String]) -> Result<Vec<ArticleRecord>> {
        let total = urls.len();
        let mut articles = Vec::with_capacity(total);

        for (i, url) in urls.iter().enumerate() {
            let logger = self.logger.clone().with_prefix(format!("[{}/{}]", i + 1, total));
            logger.debug(&format!("Fetching {}", url));

            let raw = match self.scraper.scrape_article(url).await {
                Ok(raw) => raw,
                Err(e) => {
                    logger.error(&format!("❌ {}", e));
                    return Err(e);
                }
            };
            let article = raw.into_record();
            logger.info(&format!(
                "✅ {} - {}",
                article.title.as_deref().unwrap_or("(untitled)"),
                url
            ));
            articles.push(article);
        }

        Ok(articles)
    }

    /// [`crawl`](Self::crawl) followed by a single write of the batch.
    /// Nothing is written when the crawl fails.
    pub async fn crawl_and_store(&self, urls: &[String]) -> Result<Vec<ArticleRecord>> {
        let articles = self.crawl(urls).await?;
        self.storage.store_articles(&articles).await?;
        self.logger.info(&format!("💾 Stored {} articles", articles.len()));
        Ok(articles)
    }
}
