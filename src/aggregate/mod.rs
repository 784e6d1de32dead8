// src/aggregate/mod.rs
// =============================================================================
// This module combines the two GitHub calls into the final list.
//
// Flow:
// 1. One search request for the top starred repositories
// 2. One contributor lookup per repository, run concurrently
// 3. Wait for every lookup, merge, sort by rank
//
// Only step 1 can fail. Lookups always produce a value (possibly the
// "No Top Contributor Found" placeholder).
// =============================================================================

mod fan_out;

pub use fan_out::Aggregator;
