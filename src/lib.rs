//! # iof-xml
//!
//! Data model and XML mapping for IOF XML 3.0, the International
//! Orienteering Federation's interchange format for competitors, classes,
//! courses, entries, start lists and results.
//!
//! Records with cross-field invariants (fees, classes, legs, controls) are
//! created through builders that reject invalid combinations, naming each
//! violated rule. Monetary amounts use [`rust_decimal::Decimal`]; times in
//! results are seconds as `f64`, matching the schema.
//!
//! ## Quick Start
//!
//! ```rust
//! use iof_xml::core::*;
//! use rust_decimal::Decimal;
//!
//! let fee = FeeBuilder::new(LanguageString::new("Senior"))
//!     .amount(Amount::with_currency(Decimal::new(1250, 2), "EUR"))
//!     .build()
//!     .unwrap();
//!
//! let class = Class::builder("Men Elite").fee(fee).build().unwrap();
//! assert_eq!(class.fees()[0].amount().unwrap().amount.to_string(), "12.50");
//!
//! let err = FeeBuilder::new(LanguageString::new("Broken"))
//!     .amount(Amount::new(Decimal::new(10, 0)))
//!     .percentage(5.0)
//!     .build()
//!     .unwrap_err();
//! assert_eq!(err.rule_ids(), vec!["FEE-1"]);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Record types, vocabularies, builders and validation rules |
//! | `xml` (default) | IOF XML 3.0 reading and writing of the ten document roots |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "xml")]
pub mod xml;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
