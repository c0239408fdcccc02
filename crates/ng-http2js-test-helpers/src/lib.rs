//! Test utilities and fixtures for ng-http2js
//!
//! This crate provides shared test helpers for the integration tests
//! (tests/ directory) of the core crate.

pub mod fixtures;
pub mod logging;
pub mod mocks;
pub mod run;
