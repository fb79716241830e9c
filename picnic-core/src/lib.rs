//! Core library for the `picnic` CLI.
//!
//! This crate defines:
//! - Configuration loading
//! - The forecast data model and date/temperature lookups
//! - Picnic recommendation and input validation rules
//! - Abstraction over the weather provider
//!
//! It is used by `picnic-cli`, but can also be reused by other binaries or services.

pub mod advice;
pub mod calendar;
pub mod config;
pub mod error;
pub mod model;
pub mod planner;
pub mod provider;
pub mod validation;

pub use advice::classify;
pub use calendar::{WeekdayIndex, next_occurrence};
pub use config::{Config, ProviderConfig};
pub use error::{PicnicError, Result};
pub use model::{Forecast, ForecastDay, UnitGroup, WeekendPlan};
pub use planner::plan_weekend;
pub use provider::{ForecastProvider, provider_from_config};
pub use validation::{ArgumentKind, validate};
