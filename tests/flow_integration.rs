//! End-to-end flow tests against the scripted API: typed input, debounce,
//! resolution, then the dependent fetch, all through the public surface.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tokio::time::sleep;

use rentorbuy::api::scripted::{place, ScriptedApi};
use rentorbuy::api::types::{RentalRate, RentalRatesResponse, ResponseStatus, YearRates};
use rentorbuy::api::QueryApi;
use rentorbuy::flows::{BuyerFlow, RenterFlow};
use rentorbuy::surface::{BufferField, Notifier, OutputSink, RecordingNotifier, RecordingSink, TextField};
use rentorbuy::LookupConfig;

fn springfield_rates() -> RentalRatesResponse {
    RentalRatesResponse {
        result: ResponseStatus::Success,
        message: String::new(),
        result_size: 2,
        year_count: 1,
        years: vec![YearRates {
            year: 2013,
            rental_rates: vec![
                RentalRate {
                    building_type: "APT".to_string(),
                    unit_type: "2BR".to_string(),
                    rental_rate: 950.0,
                },
                RentalRate {
                    building_type: "ROW".to_string(),
                    unit_type: "3BR".to_string(),
                    rental_rate: 1100.5,
                },
            ],
        }],
    }
}

#[tokio::test(start_paused = true)]
async fn renter_flow_resolves_then_renders_rates() {
    let api = Arc::new(ScriptedApi::default());
    api.script_places(
        "Springfield",
        Duration::from_millis(10),
        vec![place("Springfield", 5, 7)],
    );
    api.script_rates(Duration::from_millis(10), springfield_rates());

    let field = Arc::new(BufferField::new(""));
    let sink = Arc::new(RecordingSink::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let flow = RenterFlow::new(
        Arc::clone(&api) as Arc<dyn QueryApi>,
        &LookupConfig::default(),
        Arc::clone(&field) as Arc<dyn TextField>,
        Arc::clone(&sink) as Arc<dyn OutputSink>,
        Arc::clone(&notifier) as Arc<dyn Notifier>,
    );

    // Fetching before anything is resolved blocks with a notification.
    assert!(flow.fetch_rates().is_none());
    assert_eq!(notifier.messages().len(), 1);

    // Type the location; let the debounce and lookup settle.
    field.set_text("Springfield");
    let lookup = flow.on_location_input().expect("qualifying input");
    lookup.await.expect("lookup completes");

    assert!(flow.selection().is_set());
    assert_eq!(field.text(), "Springfield");

    let fetch = flow.fetch_rates().expect("resolved place allows fetch");
    fetch.await.expect("fetch completes");

    let rendered = sink.contents();
    assert_eq!(rendered.len(), 1);
    assert!(rendered[0].starts_with("Year: 2013"));
    assert!(rendered[0].contains("Building Unit Type: 3BR"));
    // The renter endpoint is keyed by the 5-digit code.
    assert_eq!(api.rates_calls(), vec![5]);
}

#[tokio::test(start_paused = true)]
async fn buyer_flow_sends_codes_price_and_year() {
    let api = Arc::new(ScriptedApi::default());
    api.script_places(
        "Shelbyville",
        Duration::from_millis(10),
        vec![place("Shelbyville", 11, 13)],
    );
    api.script_valuation(json!({"adjustedPrice": 312000.0, "avgYearlyIndex": 124.8}));

    let field = Arc::new(BufferField::new(""));
    let price_field = Arc::new(BufferField::new("250000"));
    let year_field = Arc::new(BufferField::new("2012"));
    let sink = Arc::new(RecordingSink::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let flow = BuyerFlow::new(
        Arc::clone(&api) as Arc<dyn QueryApi>,
        &LookupConfig::default(),
        Arc::clone(&field) as Arc<dyn TextField>,
        Arc::clone(&price_field) as Arc<dyn TextField>,
        Arc::clone(&year_field) as Arc<dyn TextField>,
        Arc::clone(&sink) as Arc<dyn OutputSink>,
        Arc::clone(&notifier) as Arc<dyn Notifier>,
    );

    flow.on_price_input();
    flow.on_year_input();

    // Valuation before the place resolves: blocked, nothing issued.
    assert!(flow.fetch_valuation().is_none());
    assert!(api.valuation_calls().is_empty());

    field.set_text("Shelbyville");
    let lookup = flow.on_location_input().expect("qualifying input");
    lookup.await.expect("lookup completes");

    let fetch = flow.fetch_valuation().expect("preconditions hold");
    fetch.await.expect("fetch completes");

    assert_eq!(api.valuation_calls(), vec![(11, 13, 250000.0, 2012)]);
    let rendered = sink.contents();
    assert_eq!(rendered.len(), 1);
    assert!(rendered[0].contains("312000"));
}

#[tokio::test(start_paused = true)]
async fn mid_flight_retype_keeps_only_the_latest_place() {
    let api = Arc::new(ScriptedApi::default());
    api.script_places(
        "Springfield",
        Duration::from_millis(800),
        vec![place("Springfield", 5, 7)],
    );
    api.script_places(
        "Shelbyville",
        Duration::from_millis(10),
        vec![place("Shelbyville", 11, 13)],
    );

    let field = Arc::new(BufferField::new(""));
    let sink = Arc::new(RecordingSink::default());
    let flow = RenterFlow::new(
        Arc::clone(&api) as Arc<dyn QueryApi>,
        &LookupConfig::default(),
        Arc::clone(&field) as Arc<dyn TextField>,
        Arc::clone(&sink) as Arc<dyn OutputSink>,
        Arc::new(RecordingNotifier::default()),
    );

    field.set_text("Springfield");
    let first = flow.on_location_input().expect("qualifying input");
    // Clear the debounce so the first lookup is in flight, then retype.
    sleep(Duration::from_millis(600)).await;
    field.set_text("Shelbyville");
    let second = flow.on_location_input().expect("qualifying input");

    first.await.expect("first lookup settles");
    second.await.expect("second lookup settles");

    assert_eq!(field.text(), "Shelbyville");
    let selection = flow.selection();
    assert_eq!(selection.scg_code5, 11);
    assert_eq!(selection.scg_code7, 13);
}
