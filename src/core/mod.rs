//! Core IOF data model types and validation.
//!
//! This module provides the typed records of the IOF XML 3.0 data
//! standard, the closed vocabularies, and the construction-time rules of
//! fees, legs, classes and controls.

mod base;
mod class;
mod course;
mod documents;
mod entry;
mod error;
mod event;
mod fee;
mod party;
mod result;
mod service;
mod start;
pub mod time;
pub mod validation;
pub mod vocab;

pub use base::*;
pub use class::*;
pub use course::*;
pub use documents::*;
pub use entry::*;
pub use error::*;
pub use event::*;
pub use fee::*;
pub use party::*;
pub use result::*;
pub use service::*;
pub use start::*;
pub use time::{DateAndOptionalTime, DateTime, Time};
pub use validation::{Rule, Validate};
pub use vocab::*;
