// src/client/api.rs
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::dtos::product::ListingResponse;
use crate::error::AppError;

/// The two queries the client issues against the catalog service.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_products(&self, page: i64, search: &str) -> Result<ListingResponse, AppError>;

    async fn search_suggestions(&self, q: &str) -> Result<Vec<String>, AppError>;
}

/// `CatalogApi` over HTTP. No timeout and no retry are configured.
#[derive(Clone)]
pub struct HttpCatalogApi {
    client: Client,
    base_url: String,
}

impl HttpCatalogApi {
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T, Q>(&self, path: &str, query: &Q) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status { status: status.as_u16(), url });
        }
        debug!(%url, status = status.as_u16(), "Catalog responded");
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    #[instrument(skip(self))]
    async fn list_products(&self, page: i64, search: &str) -> Result<ListingResponse, AppError> {
        let page = page.to_string();
        self.get_json("/api/products", &[("page", page.as_str()), ("search", search)])
            .await
    }

    #[instrument(skip(self))]
    async fn search_suggestions(&self, q: &str) -> Result<Vec<String>, AppError> {
        self.get_json("/api/search-suggestions", &[("q", q)]).await
    }
}
