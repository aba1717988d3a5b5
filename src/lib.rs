//! Debounced place lookup and dependent rental/valuation fetches for the
//! housing query API.
//!
//! The crate turns rapid text edits on a location field into at most one
//! in-flight place lookup per pause in typing, discards responses that a
//! newer edit has superseded, and fires guarded follow-up fetches (rental
//! rates or an indexed house valuation) once a place is resolved.
//!
//! Front-end surfaces are abstracted behind the ports in [`surface`]; the
//! shipped `rentorbuy` binary is a console front-end wired through the same
//! ports.

pub mod action;
pub mod api;
pub mod config;
pub mod error;
pub mod flows;
pub mod lookup;
pub mod render;
pub mod surface;

pub use action::{BuyerValuationAction, RenterRatesAction};
pub use api::{HttpQueryApi, QueryApi};
pub use config::LookupConfig;
pub use error::ApiError;
pub use flows::{BuyerFlow, RenterFlow};
pub use lookup::{DebouncedLookup, LookupState, Selection};
