//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by every route, currently the
//! propagation of a correlation identifier.

pub mod trace;

pub use trace::{Trace, TRACE_ID_HEADER};
