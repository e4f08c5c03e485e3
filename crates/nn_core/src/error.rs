use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Scraping error: {0}")]
    Scraping(String),

    #[error("No URLs to crawl")]
    NoUrls,
}

impl Error {
    pub fn fetch(url: &str, source: reqwest::Error) -> Self {
        Self::Fetch {
            url: url.to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
