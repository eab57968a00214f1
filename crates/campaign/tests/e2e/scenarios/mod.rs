//! E2E test scenarios, one module per campaign plus failure injection.

mod failure;
mod help_card;
mod sort_pagination;
mod theme;
