//! Core types shared across redline facilities
//!
//! This crate provides foundational types used by the diff engine,
//! its logging facility and the presentation layer:
//!
//! - **Correlation types**: RequestId, used to tag comparison requests
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RequestId;
