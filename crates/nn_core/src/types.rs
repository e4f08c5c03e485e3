use serde::{Deserialize, Serialize};
use crate::text::normalize;

/// Column order of the persisted article table.
pub const ARTICLE_COLUMNS: [&str; 3] = ["title", "date", "content"];

/// What a scraper pulled out of one page, before any cleaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawArticle {
    pub title: Option<String>,
    pub date: Option<String>,
    pub content: Option<String>,
}

impl RawArticle {
    /// Run the body text through [`normalize`], turning a missing body into "".
    pub fn into_record(self) -> ArticleRecord {
        ArticleRecord {
            title: self.title,
            date: self.date,
            content: normalize(self.content.as_deref()),
        }
    }
}

/// One crawled article, ready to be written as a table row.
///
/// Field order matches [`ARTICLE_COLUMNS`]; `None` serializes as an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: Option<String>,
    /// Publication timestamp exactly as rendered by the page.
    pub date: Option<String>,
    pub content: String,
}

/// A loaded flat file: header names plus string cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cells of the named column in row order, `None` if the column is absent.
    /// Rows shorter than the header yield "".
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(index).map(String::as_str).unwrap_or(""))
                .collect(),
        )
    }
}
