use std::fmt;

use async_trait::async_trait;
use bs_core::{Article, BlogListing, Error, Result, StatsSummary};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;

/// The backend endpoints the client talks to.
#[async_trait]
pub trait SearchApi: Send + Sync {
    /// `GET /search?q=<query>`
    async fn search(&self, query: &str) -> Result<Vec<Article>>;

    /// `GET /random`
    async fn random(&self) -> Result<Article>;

    /// `GET /stats`
    async fn stats(&self) -> Result<StatsSummary>;

    /// `GET /blogs`
    async fn blogs(&self) -> Result<BlogListing>;
}

pub struct HttpApi {
    client: Client,
    config: ClientConfig,
}

impl HttpApi {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = self.config.endpoint(path)?;
        debug!("GET {} {:?}", url, query);

        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Request {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        // Decode separately so malformed bodies surface as parse errors.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl fmt::Debug for HttpApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpApi")
            .field("client", &"<reqwest::Client>")
            .field("base_url", &self.config.base_url.as_str())
            .finish()
    }
}

#[async_trait]
impl SearchApi for HttpApi {
    async fn search(&self, query: &str) -> Result<Vec<Article>> {
        let mut params = vec![("q", query.to_string())];
        if let Some(limit) = self.config.search_limit {
            params.push(("limit", limit.to_string()));
        }
        self.get("/search", &params).await
    }

    async fn random(&self) -> Result<Article> {
        self.get("/random", &[]).await
    }

    async fn stats(&self) -> Result<StatsSummary> {
        self.get("/stats", &[]).await
    }

    async fn blogs(&self) -> Result<BlogListing> {
        self.get("/blogs", &[]).await
    }
}
