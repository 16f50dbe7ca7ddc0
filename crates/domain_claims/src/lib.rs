//! Claims Domain
//!
//! This crate holds the claim records served by the API and the summary
//! generator that turns a claim and its case notes into narrative text.
//!
//! # Summary Flow
//!
//! ```text
//! Claim + notes -> truncate notes -> prompt -> CompletionPort
//!                                              |
//!            +---------------------------------+-----------------------+
//!            | structured JSON      | free-form prose   | port error   |
//!            v                      v                   v              |
//!      field extraction      sentence split       fixed failure bundle |
//! ```
//!
//! With no completion port configured the generator builds a templated
//! bundle from the claim fields alone.

pub mod claim;
pub mod store;
pub mod ports;
pub mod prompt;
pub mod parsing;
pub mod summary;
pub mod error;

pub use claim::{Claim, NoteCollection};
pub use store::ClaimStore;
pub use ports::{CompletionPort, CompletionRequest, Completion};
pub use summary::{SummaryBundle, SummaryGenerator, GenerationOptions};
pub use error::{ClaimError, SummaryParseError};
