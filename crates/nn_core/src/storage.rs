use async_trait::async_trait;
use crate::types::{ArticleRecord, Table};
use crate::Result;

#[async_trait]
pub trait ArticleStorage: Send + Sync {
    /// Persist a finished batch, one row per record, replacing previous contents
    async fn store_articles(&self, articles: &[ArticleRecord]) -> Result<()>;

    /// Load whatever table is currently persisted, without assuming its columns
    async fn load_table(&self) -> Result<Table>;
}
