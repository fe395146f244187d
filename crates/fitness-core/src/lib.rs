//! Cross-cutting plumbing shared by the gateway and the users service.

pub mod health;
pub mod middleware;
pub mod tracing;
