//! Core Kernel - Foundational types for the claim status service
//!
//! This crate provides the building blocks shared by the domain, infrastructure
//! and interface layers:
//! - Strongly-typed claim identifiers with format validation
//! - The core error type
//! - Port error taxonomy and marker traits for adapters

pub mod identifiers;
pub mod error;
pub mod ports;

pub use identifiers::{ClaimId, CLAIM_ID_FORMAT};
pub use error::CoreError;
pub use ports::{PortError, DomainPort};
