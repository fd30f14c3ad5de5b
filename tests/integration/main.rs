//! Integration tests

mod e2e_test;
mod scenario_test;
mod valuation_test;
