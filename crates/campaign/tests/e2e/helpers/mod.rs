//! Shared E2E test helpers.
//!
//! Provides reusable utilities for building test configurations,
//! constructing simulated back offices and asserting on campaign reports.

pub mod assertions;
pub mod config;
pub mod fixtures;
