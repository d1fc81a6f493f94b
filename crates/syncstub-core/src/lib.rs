//! Shared plumbing for the syncstub services: tracing setup, health probes
//! and request-id middleware.

pub mod health;
pub mod middleware;
pub mod tracing;
