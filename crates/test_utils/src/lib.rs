//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claim status service test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built claims, notes, and raw JSON documents
//! - `builders`: Builder patterns for test data construction
//! - `completion`: Scripted and failing completion ports
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators
//! - `logs`: Captured log output for asserting on events

pub mod fixtures;
pub mod builders;
pub mod completion;
pub mod assertions;
pub mod generators;
pub mod logs;

pub use fixtures::*;
pub use builders::*;
pub use completion::*;
pub use assertions::*;
pub use generators::*;
pub use logs::*;
