//! The two wired instantiations: renter and buyer.
//!
//! Each flow owns one [`DebouncedLookup`] and one dependent action, sharing
//! a lookup-state handle between them, and forwards the front-end's
//! input-change and trigger events to the right component.

use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;

use crate::action::{BuyerInputs, BuyerValuationAction, RenterRatesAction};
use crate::api::QueryApi;
use crate::config::LookupConfig;
use crate::lookup::{DebouncedLookup, LookupState, LookupStateHandle, Selection};
use crate::surface::{Notifier, OutputSink, TextField};

pub struct RenterFlow {
    lookup: DebouncedLookup,
    rates: RenterRatesAction,
}

impl RenterFlow {
    pub fn new(
        api: Arc<dyn QueryApi>,
        config: &LookupConfig,
        location_field: Arc<dyn TextField>,
        output: Arc<dyn OutputSink>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let state: LookupStateHandle = Arc::new(Mutex::new(LookupState::default()));
        let lookup = DebouncedLookup::new(
            Arc::clone(&api),
            location_field,
            Arc::clone(&state),
            config,
        );
        let rates = RenterRatesAction::new(api, state, output, notifier);
        Self { lookup, rates }
    }

    /// Location field input-change event.
    pub fn on_location_input(&self) -> Option<JoinHandle<()>> {
        self.lookup.on_input()
    }

    /// Explicit "show me the rates" trigger.
    pub fn fetch_rates(&self) -> Option<JoinHandle<()>> {
        self.rates.trigger()
    }

    pub fn selection(&self) -> Selection {
        self.lookup.selection()
    }
}

pub struct BuyerFlow {
    lookup: DebouncedLookup,
    inputs: Arc<BuyerInputs>,
    valuation: BuyerValuationAction,
}

impl BuyerFlow {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        api: Arc<dyn QueryApi>,
        config: &LookupConfig,
        location_field: Arc<dyn TextField>,
        price_field: Arc<dyn TextField>,
        year_field: Arc<dyn TextField>,
        output: Arc<dyn OutputSink>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let state: LookupStateHandle = Arc::new(Mutex::new(LookupState::default()));
        let lookup = DebouncedLookup::new(
            Arc::clone(&api),
            location_field,
            Arc::clone(&state),
            config,
        );
        let inputs = Arc::new(BuyerInputs::new(price_field, year_field));
        let valuation =
            BuyerValuationAction::new(api, state, Arc::clone(&inputs), output, notifier);
        Self {
            lookup,
            inputs,
            valuation,
        }
    }

    pub fn on_location_input(&self) -> Option<JoinHandle<()>> {
        self.lookup.on_input()
    }

    pub fn on_price_input(&self) {
        self.inputs.on_price_input();
    }

    pub fn on_year_input(&self) {
        self.inputs.on_year_input();
    }

    /// Explicit "value my house" trigger.
    pub fn fetch_valuation(&self) -> Option<JoinHandle<()>> {
        self.valuation.trigger()
    }

    pub fn selection(&self) -> Selection {
        self.lookup.selection()
    }
}
