//! deal-valuator: Valuation calculator for TV-licensing deal negotiations
//!
//! This library provides the core components for:
//! - Deal valuation (financing cost, contract adjustment, add-on, BATNA)
//! - Streaming viewership forecasts and counterparty margin
//! - Advisory input range hints
//! - In-memory scenario store with save/load
//! - Single-user negotiation session
//! - Currency/percent formatting and text reports
//! - Logging and metrics

pub mod cli;
pub mod config;
pub mod report;
pub mod scenario;
pub mod session;
pub mod telemetry;
pub mod valuation;
