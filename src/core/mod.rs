//! Core billing types, totals, numbering, and validation.
//!
//! All monetary values use [`rust_decimal::Decimal`]; totals are recomputed
//! wholesale from the lines on every write and stored on the documents.

mod builder;
mod commands;
mod error;
mod numbering;
mod totals;
mod types;
mod validation;

pub use builder::*;
pub use commands::*;
pub use error::*;
pub use numbering::*;
pub use totals::*;
pub use types::*;
pub use validation::*;
