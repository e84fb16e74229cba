use reqwest::blocking::Client;

use crate::catalog::decode::decode_items;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::models::FoodItem;

/// Read-only access to the food-search service.
pub trait FoodSource {
    /// Items whose name matches `query`, in the order the service returns them.
    fn search(&self, query: &str) -> Result<Vec<FoodItem>>;

    /// The whole catalog. The service treats an empty query as "everything".
    fn fetch_all(&self) -> Result<Vec<FoodItem>> {
        self.search("")
    }
}

/// `FoodSource` backed by `GET <base-url>/food/search?query=<q>`.
///
/// No retries, no timeout, no cancellation: each call is one request.
pub struct HttpFoodSource {
    client: Client,
    search_url: String,
}

impl HttpFoodSource {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            search_url: config.search_url(),
        })
    }

    /// Endpoint this source queries.
    pub fn search_url(&self) -> &str {
        &self.search_url
    }
}

impl FoodSource for HttpFoodSource {
    fn search(&self, query: &str) -> Result<Vec<FoodItem>> {
        log::debug!("GET {} query={:?}", self.search_url, query);

        let body = self
            .client
            .get(&self.search_url)
            .query(&[("query", query)])
            .send()?
            .error_for_status()?
            .text()?;

        let items = decode_items(&body)?;
        log::debug!("query={:?} returned {} items", query, items.len());
        Ok(items)
    }
}
