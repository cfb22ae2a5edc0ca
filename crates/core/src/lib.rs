//! Shared primitives for the tasklist service: ID and timestamp types,
//! the domain error enum, and ISO-8601 timestamp parsing.

pub mod error;
pub mod time;
pub mod types;
