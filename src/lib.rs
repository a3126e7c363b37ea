//! # facturier
//!
//! Billing core for small businesses: clients, produits, devis, factures,
//! bons de livraison, paiements, with deterministic totals, unique document
//! numbering, and print-ready PDF generation.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Totals are recomputed wholesale from the lines on every write and stored
//! on the document; rendering always prints what was last persisted.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use facturier::core::*;
//! use rust_decimal_macros::dec;
//!
//! let devis = DevisBuilder::new("D-2025-0001", NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
//!     .client("cli-0001", "Société Horizon")
//!     .date_expiration(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap())
//!     .add_ligne(LigneBuilder::new("prod-0001", "Maintenance", 2, dec!(100))
//!         .remise(dec!(10))
//!         .build())
//!     .remise_totale(dec!(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(devis.sous_total, dec!(180));
//! assert_eq!(devis.total, dec!(192.78));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Domain types, totals, numbering, stores, services, reporting |
//! | `render` | HTML templates + headless-browser PDF printing |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod report;

#[cfg(feature = "core")]
pub mod service;

#[cfg(feature = "core")]
pub mod store;

#[cfg(feature = "render")]
pub mod render;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
