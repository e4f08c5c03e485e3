pub mod config;
pub mod error;
pub mod storage;
pub mod text;
pub mod types;

pub use config::{FetchConfig, HumanDuration, USER_AGENT};
pub use error::{Error, Result};
pub use storage::ArticleStorage;
pub use text::normalize;
pub use types::{ArticleRecord, RawArticle, Table, ARTICLE_COLUMNS};
