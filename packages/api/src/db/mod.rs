//! Shared PostgreSQL connection pool, gated behind `server` so WASM builds
//! never pull in SQLx or Tokio networking code.
//!
//! The pool is a lazy process-wide singleton: the first [`get_pool`] call
//! reads `DATABASE_URL` (and optionally `DATABASE_MAX_CONNECTIONS`) from the
//! environment and caches the connection pool for all later callers.

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::get_pool;
