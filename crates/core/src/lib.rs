//! Core domain types and contracts for pokecache.
//!
//! This crate is intentionally free of I/O. It defines the resource model,
//! cache key derivation, the key-value store contract, and the upstream
//! provider contract. Concrete backends (Redis, in-memory, reqwest) live in
//! the `pokecache` binary crate.

pub mod resource;
pub mod store;
pub mod upstream;
