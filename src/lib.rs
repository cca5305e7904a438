//! Taskory: personal task management core.
//!
//! This crate provides the task domain of a multi-tenant task, event, and
//! hashtag manager: status and deadline validation, checklist item
//! reconciliation, and the services and storage adapters built around them.
//!
//! # Architecture
//!
//! Taskory follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task validation, reconciliation, persistence, and services
//! - [`config`]: Layered configuration loading
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod task;
pub mod telemetry;
