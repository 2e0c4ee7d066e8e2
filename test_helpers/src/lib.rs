//! Test helpers shared across crates.
//!
//! The crate provides byte-stream probes for checking that readers release
//! their input, builders for section-shaped JSON fixtures, and a
//! `figment::Jail` setup builder for configuration tests.

pub mod figment;
pub mod json;
pub mod stream;
