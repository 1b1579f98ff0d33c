//! Test helpers shared across crates.
//!
//! This crate provides the sample `Pojo` domain used by integration and
//! behavioural suites, figment jail helpers, and step text normalisation.

pub mod figment;
pub mod pojo;
pub mod text;
