//! The runner is responsible for loading payments from CSV, running the
//! monthly summary query, and writing the report to a writer.
//!
//! This module provides both a synchronous and an asynchronous runner implementations.
//!
mod async_runner;
mod sync_runner;

pub use async_runner::run as run_async;
pub use sync_runner::{load_payments, run};
