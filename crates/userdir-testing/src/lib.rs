//! Test utilities for the user directory.
//!
//! Provides `TestDb` (in-memory SQLite with the directory migrations applied)
//! and fixture helpers that seed tenant rows directly.
//! Use from `[dev-dependencies]` only; never in production code.

pub mod db;
pub mod fixture;

pub use db::TestDb;
