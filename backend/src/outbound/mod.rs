//! Driven adapters.
//!
//! Implementations of the domain's outbound ports; today only storage.

pub mod persistence;
