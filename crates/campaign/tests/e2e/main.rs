//! E2E tests for boprobe-campaign.
//!
//! These tests run complete campaigns against the simulated back office and
//! check step ordering, identifiers, skip-after-failure and the report shape.
//!
//! # Test Structure
//!
//! - `helpers/` -- Shared test utilities (config builder, back-office fixtures, report assertions)
//! - `scenarios/` -- Test files organized by campaign
//!
//! # Running
//!
//! ```bash
//! cargo test -p boprobe-campaign --test e2e
//! ```

mod helpers;
mod scenarios;
