//! Redis cache backend implementation.
//!
//! Provides a shared cache over Redis for multi-instance deployments,
//! using the connection manager for pooling and reconnection.

mod cache;
mod error;

pub use cache::RedisCache;
