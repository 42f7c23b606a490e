use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};
use crate::html::parse_tables;
use crate::table;
use crate::types::StatTable;

/// Anything that can turn a page URL into candidate tables
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Fetch a page and return every table found on it
    async fn fetch_tables(&self, url: &str) -> Result<Vec<StatTable>>;
}

/// FBref statistics page scraper
pub struct FbrefScraper {
    client: Client,
    config: ScraperConfig,
}

impl FbrefScraper {
    /// Create a new FBref scraper
    pub fn new(config: ScraperConfig) -> Result<Self> {
        config.validate().map_err(ScrapeError::Client)?;

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ScrapeError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    async fn fetch_html(&self, url: &str) -> Result<String> {
        let delay = self.config.request_delay();
        if !delay.is_zero() {
            debug!("Waiting {:?} before requesting {}", delay, url);
            tokio::time::sleep(delay).await;
        }

        info!("Fetching: {}", url);
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ScrapeError::Status { url: url.to_string(), status: response.status() });
        }

        let html = response.text().await?;
        debug!("Fetched HTML ({} bytes) from {}", html.len(), url);
        Ok(html)
    }
}

#[async_trait]
impl TableSource for FbrefScraper {
    async fn fetch_tables(&self, url: &str) -> Result<Vec<StatTable>> {
        let html = self.fetch_html(url).await?;
        let tables = parse_tables(&html)?;
        debug!("Found {} tables at {}", tables.len(), url);
        Ok(tables)
    }
}

/// Fetch a page and reduce it to its player table
pub async fn fetch_reduced<S>(source: &S, url: &str) -> Result<StatTable>
where
    S: TableSource + ?Sized,
{
    let tables = source.fetch_tables(url).await?;

    match table::reduce(tables) {
        Some(table) => {
            info!("Got {} rows from {}", table.len(), url);
            Ok(table)
        }
        None => {
            warn!("No tables found at {}", url);
            Err(ScrapeError::no_tables(url))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PageSource(Vec<StatTable>);

    #[async_trait]
    impl TableSource for PageSource {
        async fn fetch_tables(&self, _url: &str) -> Result<Vec<StatTable>> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_fetch_reduced_empty_page() {
        let source = PageSource(Vec::new());
        let err = fetch_reduced(&source, "https://fbref.com/empty").await.unwrap_err();
        assert!(matches!(err, ScrapeError::NoTables { .. }));
    }

    #[tokio::test]
    async fn test_fetch_reduced_picks_player_table() {
        let source = PageSource(vec![
            StatTable::new(vec!["Squad".into()], vec![vec!["Getafe".into()]]),
            StatTable::new(
                vec!["Player".into(), "Gls".into()],
                vec![
                    vec!["Borja Mayoral".into(), "15".into()],
                    vec!["Player".into(), "Gls".into()],
                    vec!["Mason Greenwood".into(), "8".into()],
                ],
            ),
        ]);

        let table = fetch_reduced(&source, "https://fbref.com/stats").await.unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.headers, vec!["Player", "Gls"]);
    }

    #[test]
    fn test_scraper_rejects_invalid_config() {
        let config = ScraperConfig { timeout_secs: 0, ..Default::default() };
        assert!(FbrefScraper::new(config).is_err());
    }
}
