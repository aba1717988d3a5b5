//! HTTP client for the housing query API.
//!
//! Thin GET-with-query-string wrapper over `reqwest`. A call succeeds only
//! at transport status 200; the body is read as text and decoded with
//! `serde_json` so malformed payloads surface as [`ApiError::Decode`]
//! rather than a generic transport error.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::types::{PlacesResponse, RentalRatesResponse};
use crate::config::LookupConfig;
use crate::error::ApiError;

/// The remote query API, seen from the client side.
///
/// [`HttpQueryApi`] speaks HTTP; tests and offline demos use
/// [`super::ScriptedApi`].
#[async_trait]
pub trait QueryApi: Send + Sync {
    /// `api/places?name=<text>` — place/city matches for a partial name.
    async fn find_places(&self, name: &str) -> Result<PlacesResponse, ApiError>;

    /// `api/renter/result?scgCode5=<code>` — per-year rental rates.
    async fn renter_rates(&self, scg_code5: i64) -> Result<RentalRatesResponse, ApiError>;

    /// `api/buyer/result?...` — house price adjusted to the reference
    /// index. Payload shape is not pinned down; rendered verbatim.
    async fn indexed_house_price(
        &self,
        scg_code5: i64,
        scg_code7: i64,
        price: f64,
        year_of_purchase: i32,
    ) -> Result<Value, ApiError>;
}

pub struct HttpQueryApi {
    client: Client,
    base_url: Url,
}

impl HttpQueryApi {
    pub fn new(config: &LookupConfig) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.base_url.join(path)?;
        debug!(%url, "issuing query API request");

        let response = self.client.get(url).query(query).send().await?;
        if response.status() != StatusCode::OK {
            return Err(ApiError::Status(response.status()));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl QueryApi for HttpQueryApi {
    async fn find_places(&self, name: &str) -> Result<PlacesResponse, ApiError> {
        let response: PlacesResponse = self
            .get_json("places", &[("name", name.to_string())])
            .await?;
        if !response.result.is_success() {
            return Err(ApiError::Rejected(response.message));
        }
        Ok(response)
    }

    async fn renter_rates(&self, scg_code5: i64) -> Result<RentalRatesResponse, ApiError> {
        let response: RentalRatesResponse = self
            .get_json("renter/result", &[("scgCode5", scg_code5.to_string())])
            .await?;
        if !response.result.is_success() {
            return Err(ApiError::Rejected(response.message));
        }
        Ok(response)
    }

    async fn indexed_house_price(
        &self,
        scg_code5: i64,
        scg_code7: i64,
        price: f64,
        year_of_purchase: i32,
    ) -> Result<Value, ApiError> {
        self.get_json(
            "buyer/result",
            &[
                ("scgCode5", scg_code5.to_string()),
                ("scgCode7", scg_code7.to_string()),
                ("price", price.to_string()),
                ("yearOfPurchase", year_of_purchase.to_string()),
            ],
        )
        .await
    }
}
