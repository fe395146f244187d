//! Test utilities for the fitness services.
//!
//! Provides a wiremock-backed stand-in for the users service and DTO fixtures.
//! Use as a dev-dependency only — never in production code.

pub mod fixture;
pub mod users;
