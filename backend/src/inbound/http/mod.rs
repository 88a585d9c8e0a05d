//! HTTP inbound adapter exposing REST endpoints.

pub mod directories;
pub mod document;
pub mod error;
pub mod error_mapper;
pub mod health;
pub mod messages;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
