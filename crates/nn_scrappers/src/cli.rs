use std::path::{Path, PathBuf};
use clap::Args;
use nn_core::{ArticleRecord, Error, FetchConfig, HumanDuration, Result};
use nn_storage::{create_storage, DEFAULT_ARTICLES_PATH};
use tracing::info;
use url::Url;
use crate::manager::ScraperManager;
use crate::scrapers::NaverScraper;

#[derive(Args, Debug, Clone)]
pub struct CrawlArgs {
    /// Article URLs to fetch, in order (e.g. https://n.news.naver.com/article/001/0000000000)
    #[arg(required_unless_present = "urls_file")]
    pub urls: Vec<Url>,

    /// File with one URL per line; blank lines and lines starting with '#' are skipped.
    /// Its URLs come before the ones given on the command line.
    #[arg(long)]
    pub urls_file: Option<PathBuf>,

    /// Where to write the article table
    #[arg(short, long, default_value = DEFAULT_ARTICLES_PATH)]
    pub output: PathBuf,

    /// Per-request timeout (e.g. 30s, 1m). No timeout if omitted.
    #[arg(long)]
    pub timeout: Option<HumanDuration>,
}

impl CrawlArgs {
    pub fn fetch_config(&self) -> FetchConfig {
        match self.timeout {
            Some(HumanDuration(timeout)) => FetchConfig::new().with_timeout(timeout),
            None => FetchConfig::new(),
        }
    }

    pub fn collect_urls(&self) -> Result<Vec<String>> {
        let mut urls = match &self.urls_file {
            Some(path) => read_urls_file(path)?,
            None => Vec::new(),
        };
        urls.extend(self.urls.iter().map(|url| url.to_string()));
        if urls.is_empty() {
            return Err(Error::NoUrls);
        }
        Ok(urls)
    }
}

pub fn parse_url_list(contents: &str) -> Result<Vec<String>> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            Url::parse(line)
                .map(|url| url.to_string())
                .map_err(|e| Error::InvalidUrl(format!("{}: {}", line, e)))
        })
        .collect()
}

fn read_urls_file(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)?;
    parse_url_list(&contents)
}

/// Crawl the configured URLs and write them to the output table.
pub async fn handle_crawl(args: CrawlArgs) -> Result<Vec<ArticleRecord>> {
    let urls = args.collect_urls()?;
    info!("🦗 Crawling {} articles", urls.len());

    let scraper = NaverScraper::new(&args.fetch_config())?;
    let storage = create_storage(&args.output);
    let manager = ScraperManager::new(Box::new(scraper), storage);

    let articles = manager.crawl_and_store(&urls).await?;
    println!("Saved {} articles to {}", articles.len(), args.output.display());
    Ok(articles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn args(urls: &[&str]) -> CrawlArgs {
        CrawlArgs {
            urls: urls.iter().map(|u| Url::parse(u).unwrap()).collect(),
            urls_file: None,
            output: PathBuf::from(DEFAULT_ARTICLES_PATH),
            timeout: None,
        }
    }

    #[test]
    fn test_parse_url_list() {
        let contents = "\n# comment\nhttps://n.news.naver.com/article/001/0000000000\n  https://n.news.naver.com/article/001/0000000001  \n";
        let urls = parse_url_list(contents).unwrap();
        assert_eq!(
            urls,
            vec![
                "https://n.news.naver.com/article/001/0000000000",
                "https://n.news.naver.com/article/001/0000000001",
            ]
        );
        assert!(matches!(parse_url_list("not a url"), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_collect_urls_file_first() {
        let dir = tempfile::tempdir().unwrap();
        let list = dir.path().join("urls.txt");
        std::fs::write(&list, "https://example.test/from-file\n").unwrap();

        let mut args = args(&["https://example.test/from-args"]);
        args.urls_file = Some(list);

        assert_eq!(
            args.collect_urls().unwrap(),
            vec!["https://example.test/from-file", "https://example.test/from-args"]
        );
    }

    #[test]
    fn test_collect_urls_rejects_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let list = dir.path().join("urls.txt");
        std::fs::write(&list, "# only a comment\n\n").unwrap();

        let mut args = args(&[]);
        args.urls_file = Some(list);

        assert!(matches!(args.collect_urls(), Err(Error::NoUrls)));
    }

    #[test]
    fn test_fetch_config() {
        assert!(args(&[]).fetch_config().timeout.is_none());

        let mut args = args(&[]);
        args.timeout = Some(HumanDuration(Duration::from_secs(30)));
        assert_eq!(args.fetch_config().timeout, Some(Duration::from_secs(30)));
    }
}
