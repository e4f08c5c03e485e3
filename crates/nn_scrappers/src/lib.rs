pub mod cli;
pub mod logging;
pub mod manager;
pub mod scrapers;

pub use cli::{handle_crawl, CrawlArgs};
pub use manager::ScraperManager;
pub use scrapers::{Scraper, SourceMetadata};

pub mod prelude {
    pub use super::scrapers::Scraper;
    pub use nn_core::{ArticleRecord, Error, RawArticle, Result};
}
