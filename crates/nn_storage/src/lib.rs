use std::path::Path;
use std::sync::Arc;
use nn_core::ArticleStorage;

pub mod backends;

pub use backends::*;

/// File name used when the caller does not pick one.
pub const DEFAULT_ARTICLES_PATH: &str = "articles.csv";

pub fn create_storage(path: impl AsRef<Path>) -> Arc<dyn ArticleStorage> {
    Arc::new(CsvStorage::new(path))
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::DEFAULT_ARTICLES_PATH;
}
