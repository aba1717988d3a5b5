//! Plain-text rendering of API responses.

use serde_json::Value;

use crate::api::types::RentalRatesResponse;

/// One labeled block per rate record, grouped under its year header, in
/// input order. Rates carry a currency prefix.
pub fn rental_rates(response: &RentalRatesResponse) -> String {
    let mut out = String::new();
    for year in &response.years {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("Year: {}", year.year));
        for (index, rate) in year.rental_rates.iter().enumerate() {
            out.push_str(&format!("\nRental Index: {}", index + 1));
            out.push_str(&format!("\nBuilding Type: {}", rate.building_type));
            out.push_str(&format!("\nBuilding Unit Type: {}", rate.unit_type));
            out.push_str(&format!("\nRental Rate: ${}", rate.rental_rate));
        }
    }
    out
}

/// The valuation payload has no pinned-down shape; dump it verbatim.
pub fn valuation(value: &Value) -> String {
    value.to_string()
}
