//! gin-rummy: Gin Rummy hand scoring
//!
//! Goals:
//! - Exact optimal-meld search: lowest deadwood for any hand
//! - Knock legality and knock settlement with lay-offs
//! - Deterministic results; no panics for invalid input, `Result` instead
//!
//! ## Quick start: score a hand
//! ```
//! use gin_rummy::hand::Hand;
//! use gin_rummy::scoring::{can_knock, optimal_melds};
//!
//! let hand: Hand = "Ac Ad As 4c 5c 6c 7c Qd Th 4h".parse().unwrap();
//! let report = optimal_melds(&hand);
//! assert_eq!(report.deadwood, 24);
//! assert_eq!(report.melds.len(), 2);
//!
//! // after drawing, an 11-card hand knocks if some discard leaves <= 10
//! let drawn: Hand = "Ac Ad As 4c 5c 6c 7c 8c 9c Th 4h".parse().unwrap();
//! assert!(can_knock(&drawn).unwrap());
//! ```
//!
//! ## Logging
//! Scoring emits `tracing` events under the `gin_rummy::scoring` target.
//! Install any subscriber to see them, or pass
//! [`observer::NoopObserver`] to a [`scoring::Scorer`] to opt out.

pub mod cards;
pub mod deck;
pub mod hand;
pub mod meld;
pub mod observer;
pub mod rules;
pub mod scoring;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
