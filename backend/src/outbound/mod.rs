//! Outbound adapters implementing domain ports.
//!
//! Adapters translate between domain types and whatever backs them. They hold
//! no business rules.

pub mod memory;
