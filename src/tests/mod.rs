//! Consolidated test modules.
//!
//! End-to-end purge coverage that exercises the full path from
//! configuration through the engine to a real database.
