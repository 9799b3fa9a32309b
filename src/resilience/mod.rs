//! Resilience helpers.
//!
//! # Design Decisions
//! - Every external call has a deadline (see `chain::client`)
//! - No retries of state-changing calls; only read-only polling backs off
//! - Jittered backoff keeps long waits from hammering public RPC endpoints

pub mod backoff;
