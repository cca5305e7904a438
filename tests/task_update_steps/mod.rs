//! Step definitions for task update scenarios.

mod given;
mod then;
mod when;
pub mod world;
