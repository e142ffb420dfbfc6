//! Key-value store backend implementations.
//!
//! This module provides concrete implementations of the `KeyValueStore`
//! trait defined in `pokecache_core::store`. The implementation is selected
//! at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `memory` (default): In-memory store using tokio synchronization primitives
//! - `redis`: Redis store using the redis crate with RedisJSON commands
//!
//! These features are mutually exclusive - only one store backend can be
//! enabled at a time.

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "memory", feature = "redis"))]
compile_error!(
    "Features 'memory' and 'redis' are mutually exclusive. \
    Enable only one store backend at a time."
);

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!(
    "No store backend selected. Enable 'memory' or 'redis' feature. \
    Example: cargo build -p pokecache --features memory"
);

pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;

#[allow(unused_imports)]
pub use memory::MemoryStore;

#[cfg(feature = "redis")]
#[allow(unused_imports)]
pub use redis_impl::RedisStore;
