//! Instrument definitions.
//!
//! - [`contract`]: The European [`OptionContract`] value type

pub mod contract;

pub use contract::OptionContract;
