//! The purge engine.
//!
//! [`PurgeEngine`] permanently removes records that were soft-deleted more
//! than a configured number of days ago. Scheduling is the caller's
//! concern: typically the embedding application builds the engine once and
//! has its scheduler call [`PurgeEngine::run`] periodically.

mod engine;

pub use engine::{PurgeEngine, PurgeError};
