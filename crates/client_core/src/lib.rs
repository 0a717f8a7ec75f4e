use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use shared::{
    domain::{CategoryId, PlantId},
    error::CatalogError,
    protocol::{unwrap_record, unwrap_records, RawRecord, CATEGORIES_KEY, PLANTS_KEY},
};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

mod loading;
pub use loading::{LoadingGuard, LoadingIndicator};

pub const DEFAULT_CATALOG_BASE_URL: &str = "https://openapi.programming-hero.com/api";

#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("invalid catalog base url '{url}': {source}")]
    Parse {
        url: String,
        source: url::ParseError,
    },
    #[error("catalog base url '{0}' cannot carry path segments")]
    NotHierarchical(String),
}

/// URLs of the four catalog GET endpoints, derived from one base URL.
#[derive(Debug, Clone)]
pub struct CatalogEndpoints {
    base: Url,
}

impl CatalogEndpoints {
    pub fn new(base_url: &str) -> Result<Self, EndpointError> {
        let base = Url::parse(base_url.trim()).map_err(|source| EndpointError::Parse {
            url: base_url.to_string(),
            source,
        })?;
        if base.cannot_be_a_base() {
            return Err(EndpointError::NotHierarchical(base_url.to_string()));
        }
        Ok(Self { base })
    }

    pub fn all_plants(&self) -> String {
        self.join(&["plants"])
    }

    pub fn categories(&self) -> String {
        self.join(&["categories"])
    }

    pub fn by_category(&self, category_id: &CategoryId) -> String {
        self.join(&["category", category_id.as_str()])
    }

    pub fn plant_detail(&self, plant_id: &PlantId) -> String {
        self.join(&["plant", plant_id.as_str()])
    }

    fn join(&self, segments: &[&str]) -> String {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.to_string()
    }
}

#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn fetch_categories(&self) -> Result<Vec<RawRecord>, CatalogError>;
    async fn fetch_all_plants(&self) -> Result<Vec<RawRecord>, CatalogError>;
    async fn fetch_plants_by_category(
        &self,
        category_id: &CategoryId,
    ) -> Result<Vec<RawRecord>, CatalogError>;
    async fn fetch_plant_detail(&self, plant_id: &PlantId)
        -> Result<Option<RawRecord>, CatalogError>;
    fn loading(&self) -> LoadingIndicator;
}

pub struct HttpCatalogClient {
    http: Client,
    endpoints: CatalogEndpoints,
    loading: LoadingIndicator,
}

impl HttpCatalogClient {
    pub fn new(endpoints: CatalogEndpoints) -> Self {
        Self {
            http: Client::new(),
            endpoints,
            loading: LoadingIndicator::new(),
        }
    }

    pub fn endpoints(&self) -> &CatalogEndpoints {
        &self.endpoints
    }

    async fn get_json(&self, url: String) -> Result<Value, CatalogError> {
        let _loading = self.loading.begin();
        debug!(%url, "catalog request");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| CatalogError::Transport {
                url: url.clone(),
                message: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "catalog request failed");
            return Err(CatalogError::RequestFailed {
                url,
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| CatalogError::Decode {
                url,
                message: err.to_string(),
            })
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn fetch_categories(&self) -> Result<Vec<RawRecord>, CatalogError> {
        let body = self.get_json(self.endpoints.categories()).await?;
        Ok(unwrap_records(body, CATEGORIES_KEY))
    }

    async fn fetch_all_plants(&self) -> Result<Vec<RawRecord>, CatalogError> {
        let body = self.get_json(self.endpoints.all_plants()).await?;
        Ok(unwrap_records(body, PLANTS_KEY))
    }

    async fn fetch_plants_by_category(
        &self,
        category_id: &CategoryId,
    ) -> Result<Vec<RawRecord>, CatalogError> {
        let body = self
            .get_json(self.endpoints.by_category(category_id))
            .await?;
        Ok(unwrap_records(body, PLANTS_KEY))
    }

    async fn fetch_plant_detail(
        &self,
        plant_id: &PlantId,
    ) -> Result<Option<RawRecord>, CatalogError> {
        let body = self.get_json(self.endpoints.plant_detail(plant_id)).await?;
        Ok(unwrap_record(body, PLANTS_KEY))
    }

    fn loading(&self) -> LoadingIndicator {
        self.loading.clone()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
