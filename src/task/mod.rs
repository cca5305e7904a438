//! Task management for Taskory.
//!
//! A task carries a status from a closed set, a deadline whose presence the
//! status dictates, and an ordered checklist of items. Updates validate the
//! status and deadline, resolve referenced tags and events, and reconcile
//! the requested item list against the stored one before a single atomic
//! save. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
