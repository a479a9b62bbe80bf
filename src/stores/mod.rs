//! Storage layer for the payment query system. Provides:
//! - An in-memory payment list assembled from CSV rows ([`PaymentStore`])
//!
//! The store is the crate's own [`PaymentSource`](crate::PaymentSource);
//! any other backing store only needs to implement that trait.

mod payments;

pub use payments::PaymentStore;
