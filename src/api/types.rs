//! Housing query API response types.
//!
//! Wire names are camelCase; every endpoint wraps its payload in a
//! `result`/`message` envelope. Fields the failure envelope omits carry
//! `#[serde(default)]` so both shapes decode into the same struct.

use serde::Deserialize;

/// Application-level outcome carried in every response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    #[default]
    Success,
    Failure,
}

impl ResponseStatus {
    pub fn is_success(self) -> bool {
        matches!(self, ResponseStatus::Success)
    }
}

/// `api/places?name=<text>` response.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacesResponse {
    #[serde(default)]
    pub result: ResponseStatus,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub places: Vec<Place>,
}

/// One place record. The two SCG codes key the downstream
/// rental/valuation endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Place {
    pub name: String,
    #[serde(rename = "csdType", default)]
    pub csd_type: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(rename = "scgCode5")]
    pub scg_code5: i64,
    #[serde(rename = "scgCode7")]
    pub scg_code7: i64,
}

/// `api/renter/result?scgCode5=<code>` response. `yearCount`/`years` are
/// absent when the place has no rate data; years arrive newest first.
#[derive(Debug, Clone, Deserialize)]
pub struct RentalRatesResponse {
    #[serde(default)]
    pub result: ResponseStatus,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "resultSize", default)]
    pub result_size: i64,
    #[serde(rename = "yearCount", default)]
    pub year_count: i64,
    #[serde(default)]
    pub years: Vec<YearRates>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YearRates {
    pub year: i32,
    #[serde(rename = "rentalRates", default)]
    pub rental_rates: Vec<RentalRate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RentalRate {
    #[serde(rename = "buildingType")]
    pub building_type: String,
    #[serde(rename = "unitType")]
    pub unit_type: String,
    #[serde(rename = "rentalRate")]
    pub rental_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_places_response_without_envelope() {
        let raw = r#"{"count":2,"places":[
            {"name":"Springfield","scgCode5":5,"scgCode7":7},
            {"name":"Shelbyville","scgCode5":11,"scgCode7":13}
        ]}"#;
        let response: PlacesResponse = serde_json::from_str(raw).expect("decodes");
        assert!(response.result.is_success());
        assert_eq!(response.count, 2);
        assert_eq!(response.places[0].name, "Springfield");
        assert_eq!(response.places[0].scg_code5, 5);
        assert_eq!(response.places[0].scg_code7, 7);
    }

    #[test]
    fn decodes_failure_envelope() {
        let raw = r#"{"result":"failure","message":"You cannot serach on an empty string for places","count":0}"#;
        let response: PlacesResponse = serde_json::from_str(raw).expect("decodes");
        assert!(!response.result.is_success());
        assert_eq!(response.count, 0);
        assert!(response.places.is_empty());
    }

    #[test]
    fn decodes_rental_rates_response() {
        let raw = r#"{
            "result":"success","message":"Rental Rates for SCG: 5 & 7",
            "resultSize":2,"yearCount":1,
            "years":[{"year":2013,"rentalRates":[
                {"buildingType":"APT","unitType":"2BR","rentalRate":950.0},
                {"buildingType":"ROW","unitType":"3BR","rentalRate":1100.5}
            ]}]
        }"#;
        let response: RentalRatesResponse = serde_json::from_str(raw).expect("decodes");
        assert_eq!(response.year_count, 1);
        assert_eq!(response.years[0].year, 2013);
        assert_eq!(response.years[0].rental_rates[1].rental_rate, 1100.5);
    }

    #[test]
    fn decodes_empty_rental_rates_response() {
        // The no-results shape omits yearCount and years entirely.
        let raw = r#"{"result":"success","message":"Rental Rates for SCG: 5 & 7","resultSize":0}"#;
        let response: RentalRatesResponse = serde_json::from_str(raw).expect("decodes");
        assert_eq!(response.year_count, 0);
        assert!(response.years.is_empty());
    }
}
