pub mod naver;

pub use naver::NaverScraper;
