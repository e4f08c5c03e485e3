use async_trait::async_trait;
use nn_core::{Error, FetchConfig, RawArticle, Result, USER_AGENT};
use reqwest::Client;
use scraper::Html;
use tracing::debug;
use crate::scrapers::{utils, Scraper, SourceMetadata};

/// Article pages on n.news.naver.com.
#[derive(Debug, Clone)]
pub struct NaverScraper {
    client: Client,
}

impl NaverScraper {
    pub const TITLE_SELECTOR: &'static str = "h2#title_area";
    pub const DATE_SELECTOR: &'static str = ".media_end_head_info_datestamp_time";
    pub const BODY_SELECTOR: &'static str = "#dic_area";

    pub fn new(config: &FetchConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Pulls title, date and body out of an article page. Each field is looked up
    /// on its own, so a missing one never hides the others.
    pub fn parse_article(html: &str) -> Result<RawArticle> {
        let document = Html::parse_document(html);

        Ok(RawArticle {
            title: utils::extract_text(&document, Self::TITLE_SELECTOR, "")?,
            date: utils::extract_text(&document, Self::DATE_SELECTOR, "")?,
            content: utils::extract_text(&document, Self::BODY_SELECTOR, " ")?,
        })
    }
}

#[async_trait]
impl Scraper for NaverScraper {
    fn source_metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "Naver News",
            emoji: "📰",
        }
    }

    async fn scrape_article(&self, url: &str) -> Result<RawArticle> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| Error::fetch(url, e))?;
        let html = response.text().await.map_err(|e| Error::fetch(url, e))?;

        Self::parse_article(&html)
    }
}
