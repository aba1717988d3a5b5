//! Dependent fetches fired once a location is resolved.
//!
//! Each action guards against firing before its preconditions hold
//! (surfaced as a blocking notification) and against overlapping issuance
//! (a busy flag; a second trigger while one fetch is outstanding is a
//! silent no-op, never queued). The flag clears when the fetch settles,
//! on success and on failure alike.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;
use tracing::debug;

use crate::api::QueryApi;
use crate::lookup::LookupStateHandle;
use crate::render;
use crate::surface::{Notifier, OutputSink, TextField};

/// What the user sees when they trigger an action too early.
pub const NOT_READY_MESSAGE: &str = "be patient ...";

/// Fetches per-year rental rates for the resolved place (renter flow).
pub struct RenterRatesAction {
    api: Arc<dyn QueryApi>,
    state: LookupStateHandle,
    sink: Arc<dyn OutputSink>,
    notifier: Arc<dyn Notifier>,
    busy: Arc<AtomicBool>,
}

impl RenterRatesAction {
    pub fn new(
        api: Arc<dyn QueryApi>,
        state: LookupStateHandle,
        sink: Arc<dyn OutputSink>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            state,
            sink,
            notifier,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Explicit user trigger.
    ///
    /// Returns the in-flight task, or `None` when no place is resolved yet
    /// (notified) or an earlier fetch is still outstanding (silent).
    pub fn trigger(&self) -> Option<JoinHandle<()>> {
        let selection = self.state.lock().unwrap().selection();
        if !selection.is_set() {
            self.notifier.notify(NOT_READY_MESSAGE);
            return None;
        }
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return None;
        }

        let api = Arc::clone(&self.api);
        let sink = Arc::clone(&self.sink);
        let busy = Arc::clone(&self.busy);
        Some(tokio::spawn(async move {
            match api.renter_rates(selection.scg_code5).await {
                Ok(response) if response.year_count > 0 => {
                    sink.render(&render::rental_rates(&response));
                }
                Ok(_) => {}
                Err(err) => debug!(error = %err, "rental rates fetch failed"),
            }
            busy.store(false, Ordering::SeqCst);
        }))
    }
}

/// Buyer-side numeric inputs with their sentinel rules.
///
/// Price falls back to `-1.0` on an unparseable edit; the purchase year
/// starts at 2007 and falls back to `-1` when the raw text is shorter than
/// three characters or fails to parse. Invalid edits also clear the field.
pub struct BuyerInputs {
    price_field: Arc<dyn TextField>,
    year_field: Arc<dyn TextField>,
    price: Mutex<f64>,
    year_of_purchase: Mutex<i32>,
}

impl BuyerInputs {
    pub fn new(price_field: Arc<dyn TextField>, year_field: Arc<dyn TextField>) -> Self {
        Self {
            price_field,
            year_field,
            price: Mutex::new(-1.0),
            year_of_purchase: Mutex::new(2007),
        }
    }

    /// Price input-change handler.
    pub fn on_price_input(&self) {
        let raw = self.price_field.text();
        match raw.trim().parse::<f64>() {
            Ok(price) => *self.price.lock().unwrap() = price,
            Err(_) => {
                *self.price.lock().unwrap() = -1.0;
                self.price_field.set_text("");
            }
        }
    }

    /// Year input-change handler.
    pub fn on_year_input(&self) {
        let raw = self.year_field.text();
        let trimmed = raw.trim();
        let parsed = if trimmed.len() >= 3 {
            trimmed.parse::<i32>().ok()
        } else {
            None
        };
        match parsed {
            Some(year) => *self.year_of_purchase.lock().unwrap() = year,
            None => {
                *self.year_of_purchase.lock().unwrap() = -1;
                self.year_field.set_text("");
            }
        }
    }

    pub fn price(&self) -> f64 {
        *self.price.lock().unwrap()
    }

    pub fn year_of_purchase(&self) -> i32 {
        *self.year_of_purchase.lock().unwrap()
    }
}

/// Fetches the indexed house valuation for the resolved place (buyer flow).
pub struct BuyerValuationAction {
    api: Arc<dyn QueryApi>,
    state: LookupStateHandle,
    inputs: Arc<BuyerInputs>,
    sink: Arc<dyn OutputSink>,
    notifier: Arc<dyn Notifier>,
    busy: Arc<AtomicBool>,
}

impl BuyerValuationAction {
    pub fn new(
        api: Arc<dyn QueryApi>,
        state: LookupStateHandle,
        inputs: Arc<BuyerInputs>,
        sink: Arc<dyn OutputSink>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            state,
            inputs,
            sink,
            notifier,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Explicit user trigger. Preconditions: resolved place, price > 0,
    /// purchase year > 0.
    pub fn trigger(&self) -> Option<JoinHandle<()>> {
        let selection = self.state.lock().unwrap().selection();
        let price = self.inputs.price();
        let year_of_purchase = self.inputs.year_of_purchase();
        if !selection.is_set() || price <= 0.0 || year_of_purchase <= 0 {
            self.notifier.notify(NOT_READY_MESSAGE);
            return None;
        }
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return None;
        }

        let api = Arc::clone(&self.api);
        let sink = Arc::clone(&self.sink);
        let busy = Arc::clone(&self.busy);
        Some(tokio::spawn(async move {
            match api
                .indexed_house_price(
                    selection.scg_code5,
                    selection.scg_code7,
                    price,
                    year_of_purchase,
                )
                .await
            {
                Ok(value) => sink.render(&render::valuation(&value)),
                Err(err) => debug!(error = %err, "house valuation fetch failed"),
            }
            busy.store(false, Ordering::SeqCst);
        }))
    }
}
