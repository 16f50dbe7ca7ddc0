//! Completion Adapters
//!
//! Implementations of `domain_claims::CompletionPort` backed by remote
//! model endpoints.

pub mod azure_openai;

pub use azure_openai::{AzureOpenAiAdapter, AzureOpenAiSettings};
