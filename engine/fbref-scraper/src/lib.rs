//! FBref Scraper - Fetches statistics pages from FBref and extracts their tables
//!
//! A fetched page yields zero or more rectangular [`StatTable`]s. The reducer in
//! [`table`] picks the player table out of those candidates and strips the
//! repeated header rows FBref embeds in long tables.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod html;
pub mod table;
pub mod types;

pub use config::ScraperConfig;
pub use error::{Result, ScrapeError};
pub use fetcher::{fetch_reduced, FbrefScraper, TableSource};
pub use types::{StatTable, TableRow};
