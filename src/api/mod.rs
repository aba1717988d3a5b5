//! Client-side view of the housing query API.

pub mod client;
pub mod scripted;
pub mod types;

pub use client::{HttpQueryApi, QueryApi};
pub use scripted::ScriptedApi;
pub use types::{Place, PlacesResponse, RentalRate, RentalRatesResponse, ResponseStatus, YearRates};
