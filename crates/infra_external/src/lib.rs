//! Infrastructure Layer
//!
//! This crate connects the claims domain to the world outside the process:
//!
//! - `documents`: loads the claim and note JSON files into a `ClaimStore`
//!   once at startup
//! - `adapters`: the Azure OpenAI chat-completions implementation of
//!   `CompletionPort`
//! - `retry`: the single jittered retry applied to transient remote errors
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_external::{load_all, AzureOpenAiAdapter, AzureOpenAiSettings};
//!
//! let store = load_all("mocks/claims.json", "mocks/notes.json")?;
//! let adapter = AzureOpenAiAdapter::new(settings)?;
//! ```

pub mod documents;
pub mod error;
pub mod retry;
pub mod adapters;

pub use documents::{load_all, load_claims, load_notes};
pub use error::DocumentError;
pub use retry::RetryPolicy;
pub use adapters::{AzureOpenAiAdapter, AzureOpenAiSettings};
