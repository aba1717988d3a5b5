//! Debounced place lookup with stale-response rejection.
//!
//! Every qualifying input event resets the resolved selection, bumps a
//! generation counter, and schedules one deferred lookup. The deferred task
//! compares its captured token against the live counter twice: after the
//! debounce delay and again when the response settles. A mismatch means a
//! newer event superseded this one and the task declines to act.
//!
//! Counter and selection live under one lock ([`LookupState`]): the
//! reset-and-bump of an input event and the check-and-apply of a settling
//! response are each a single critical section, so a response can never
//! pass the staleness check and then write over a newer event's reset.
//!
//! Cancellation is advisory only: superseded requests still run to
//! completion on the wire, they just never touch the field or the
//! selection.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::debug;

use crate::api::types::Place;
use crate::api::QueryApi;
use crate::config::LookupConfig;
use crate::surface::TextField;

/// Resolved place codes. `(0, 0)` is the unset sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub scg_code5: i64,
    pub scg_code7: i64,
}

impl Selection {
    pub const UNSET: Selection = Selection {
        scg_code5: 0,
        scg_code7: 0,
    };

    pub fn is_set(&self) -> bool {
        self.scg_code5 != 0 || self.scg_code7 != 0
    }
}

/// Generation counter and resolved selection of one input group, guarded
/// together so staleness checks and selection writes are atomic with
/// respect to concurrent input events.
#[derive(Debug, Default)]
pub struct LookupState {
    generation: u64,
    selection: Selection,
}

impl LookupState {
    /// State that already carries a resolved selection.
    pub fn with_selection(selection: Selection) -> Self {
        Self {
            generation: 0,
            selection,
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    /// Start a new input event: reset the selection and hand out the next
    /// token, in one step.
    fn begin_event(&mut self) -> u64 {
        self.selection = Selection::UNSET;
        self.generation += 1;
        self.generation
    }

    /// True while `token` belongs to the newest issued event.
    fn is_current(&self, token: u64) -> bool {
        self.generation == token
    }

    /// Store `place` if `token` is still current. Check and write share
    /// the caller's lock, so a reset-and-bump cannot slip in between.
    fn apply_if_current(&mut self, token: u64, place: &Place) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.selection = Selection {
            scg_code5: place.scg_code5,
            scg_code7: place.scg_code7,
        };
        true
    }
}

/// State shared between the lookup and the dependent actions of one input
/// group.
pub type LookupStateHandle = Arc<Mutex<LookupState>>;

pub struct DebouncedLookup {
    api: Arc<dyn QueryApi>,
    field: Arc<dyn TextField>,
    state: LookupStateHandle,
    debounce: Duration,
    min_query_len: usize,
}

impl DebouncedLookup {
    pub fn new(
        api: Arc<dyn QueryApi>,
        field: Arc<dyn TextField>,
        state: LookupStateHandle,
        config: &LookupConfig,
    ) -> Self {
        Self {
            api,
            field,
            state,
            debounce: config.debounce,
            min_query_len: config.min_query_len,
        }
    }

    /// Current resolved selection.
    pub fn selection(&self) -> Selection {
        self.state.lock().unwrap().selection()
    }

    /// Input-change handler.
    ///
    /// Returns the scheduled lookup task, or `None` when the field text is
    /// below the minimum query length. Dropping the handle detaches the
    /// task; awaiting it observes completion.
    pub fn on_input(&self) -> Option<JoinHandle<()>> {
        let query = self.field.text();
        if query.chars().count() < self.min_query_len {
            // A previously scheduled lookup is left alone here; the
            // generation check still guards whether it applies.
            return None;
        }

        let token = self.state.lock().unwrap().begin_event();

        let api = Arc::clone(&self.api);
        let field = Arc::clone(&self.field);
        let state = Arc::clone(&self.state);
        let debounce = self.debounce;

        Some(tokio::spawn(async move {
            sleep(debounce).await;
            if !state.lock().unwrap().is_current(token) {
                // Superseded while waiting out the debounce.
                return;
            }

            let response = match api.find_places(&query).await {
                Ok(response) => response,
                Err(err) => {
                    debug!(query = %query, error = %err, "place lookup failed");
                    return;
                }
            };

            if response.count > 0 {
                // Only the first record is ever applied, and only while
                // this response is still the newest one.
                if let Some(place) = response.places.first() {
                    let mut state = state.lock().unwrap();
                    if state.apply_if_current(token, place) {
                        field.set_text(&place.name);
                    }
                }
            }
        }))
    }
}
