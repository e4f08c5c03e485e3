use async_trait::async_trait;
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use nn_core::{ArticleRecord, ArticleStorage, Result, Table, ARTICLE_COLUMNS};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Flat comma-separated file holding one batch of articles.
#[derive(Debug, Clone)]
pub struct CsvStorage {
    path: PathBuf,
}

impl CsvStorage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Header first, even for an empty batch, then one row per record.
pub fn write_records<W: Write>(writer: W, articles: &[ArticleRecord]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(writer);

    writer.write_record(ARTICLE_COLUMNS)?;
    for article in articles {
        writer.serialize(article)?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads any headed CSV; ragged rows are accepted as-is.
pub fn read_table<R: Read>(reader: R) -> Result<Table> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(str::to_string).collect());
    }

    Ok(Table { headers, rows })
}

#[async_trait]
impl ArticleStorage for CsvStorage {
    async fn store_articles(&self, articles: &[ArticleRecord]) -> Result<()> {
        debug!("Writing {} articles to {}", articles.len(), self.path.display());
        let file = File::create(&self.path)?;
        write_records(file, articles)
    }

    async fn load_table(&self) -> Result<Table> {
        debug!("Loading table from {}", self.path.display());
        let file = File::open(&self.path)?;
        read_table(file)
    }
}
