//! Scripted in-memory [`QueryApi`] implementation.
//!
//! Stands in for the live API in tests and offline runs: deterministic
//! responses, per-script artificial latency (driven by the tokio clock, so
//! paused-time tests stay deterministic), and a record of every call
//! received.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::time::sleep;

use super::client::QueryApi;
use super::types::{Place, PlacesResponse, RentalRatesResponse, ResponseStatus};
use crate::error::ApiError;

/// Scripted outcome for one `find_places` query string.
#[derive(Debug, Clone)]
pub struct ScriptedPlaces {
    pub delay: Duration,
    pub places: Vec<Place>,
}

#[derive(Debug, Clone, Default)]
enum RatesScript {
    /// Unscripted: respond as the server does for an unknown place.
    #[default]
    Empty,
    Respond {
        delay: Duration,
        response: RentalRatesResponse,
    },
    /// Fail at the transport layer.
    Fail,
}

#[derive(Default)]
pub struct ScriptedApi {
    place_scripts: Mutex<HashMap<String, ScriptedPlaces>>,
    place_failure: Mutex<bool>,
    place_queries: Mutex<Vec<String>>,
    rates_script: Mutex<RatesScript>,
    rates_calls: Mutex<Vec<i64>>,
    valuation_script: Mutex<Option<Value>>,
    valuation_calls: Mutex<Vec<(i64, i64, f64, i32)>>,
}

impl ScriptedApi {
    /// Script the outcome of `find_places(query)`. Unscripted queries get
    /// an empty (count 0) result.
    pub fn script_places(&self, query: &str, delay: Duration, places: Vec<Place>) {
        self.place_scripts
            .lock()
            .unwrap()
            .insert(query.to_string(), ScriptedPlaces { delay, places });
    }

    /// Make every `find_places` call fail at the transport layer.
    pub fn script_places_failure(&self) {
        *self.place_failure.lock().unwrap() = true;
    }

    pub fn script_rates(&self, delay: Duration, response: RentalRatesResponse) {
        *self.rates_script.lock().unwrap() = RatesScript::Respond { delay, response };
    }

    pub fn script_rates_failure(&self) {
        *self.rates_script.lock().unwrap() = RatesScript::Fail;
    }

    pub fn script_valuation(&self, value: Value) {
        *self.valuation_script.lock().unwrap() = Some(value);
    }

    /// Every query string `find_places` has received, in order.
    pub fn place_queries(&self) -> Vec<String> {
        self.place_queries.lock().unwrap().clone()
    }

    /// Every `scgCode5` value `renter_rates` has received, in order.
    pub fn rates_calls(&self) -> Vec<i64> {
        self.rates_calls.lock().unwrap().clone()
    }

    pub fn valuation_calls(&self) -> Vec<(i64, i64, f64, i32)> {
        self.valuation_calls.lock().unwrap().clone()
    }
}

/// Build a minimal place record for scripting.
pub fn place(name: &str, scg_code5: i64, scg_code7: i64) -> Place {
    Place {
        name: name.to_string(),
        csd_type: None,
        province: None,
        scg_code5,
        scg_code7,
    }
}

#[async_trait]
impl QueryApi for ScriptedApi {
    async fn find_places(&self, name: &str) -> Result<PlacesResponse, ApiError> {
        self.place_queries.lock().unwrap().push(name.to_string());
        if *self.place_failure.lock().unwrap() {
            return Err(ApiError::Status(
                reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            ));
        }
        let script = self.place_scripts.lock().unwrap().get(name).cloned();
        match script {
            Some(script) => {
                if !script.delay.is_zero() {
                    sleep(script.delay).await;
                }
                Ok(PlacesResponse {
                    result: ResponseStatus::Success,
                    message: String::new(),
                    count: script.places.len() as i64,
                    places: script.places,
                })
            }
            None => Ok(PlacesResponse {
                result: ResponseStatus::Success,
                message: String::new(),
                count: 0,
                places: Vec::new(),
            }),
        }
    }

    async fn renter_rates(&self, scg_code5: i64) -> Result<RentalRatesResponse, ApiError> {
        self.rates_calls.lock().unwrap().push(scg_code5);
        let script = self.rates_script.lock().unwrap().clone();
        match script {
            RatesScript::Empty => Ok(RentalRatesResponse {
                result: ResponseStatus::Success,
                message: String::new(),
                result_size: 0,
                year_count: 0,
                years: Vec::new(),
            }),
            RatesScript::Respond { delay, response } => {
                if !delay.is_zero() {
                    sleep(delay).await;
                }
                Ok(response)
            }
            RatesScript::Fail => Err(ApiError::Status(
                reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            )),
        }
    }

    async fn indexed_house_price(
        &self,
        scg_code5: i64,
        scg_code7: i64,
        price: f64,
        year_of_purchase: i32,
    ) -> Result<Value, ApiError> {
        self.valuation_calls
            .lock()
            .unwrap()
            .push((scg_code5, scg_code7, price, year_of_purchase));
        match self.valuation_script.lock().unwrap().clone() {
            Some(value) => Ok(value),
            None => Err(ApiError::Rejected(
                "no valuation scripted for this call".to_string(),
            )),
        }
    }
}
