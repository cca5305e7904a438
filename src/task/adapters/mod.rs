//! Adapter implementations for task repository and reference lookup ports.

pub mod memory;
pub mod postgres;
