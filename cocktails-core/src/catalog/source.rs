//! ``src/catalog/source.rs``
//!
//! # `CatalogSource`: where pages come from
//!
//! The loader only knows this trait. [`HttpCatalogSource`] talks to the real
//! catalog over HTTP: `GET <base>/cocktails?page=N`.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::{config::CatalogConfig, error::AppError, model::catalog::CatalogPage};

#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches one page (1-based).
    async fn fetch_page(&self, page: u32) -> Result<CatalogPage, AppError>;
}

#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: Client,
    base_url: String,
}

impl HttpCatalogSource {
    /// Builds the HTTP client with the configured connect and total timeouts.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(concat!("cocktails/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client, &config.base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/cocktails", self.base_url)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    #[instrument(level = "debug", skip(self))]
    async fn fetch_page(&self, page: u32) -> Result<CatalogPage, AppError> {
        let response = self
            .client
            .get(self.endpoint())
            .query(&[("page", page)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status {
                page,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let parsed: CatalogPage = serde_json::from_slice(&body)?;

        debug!(
            page,
            items = parsed.data.len(),
            last_page = parsed.meta.last_page,
            "Fetched catalog page"
        );
        Ok(parsed)
    }
}
