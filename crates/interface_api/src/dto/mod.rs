//! Request/response data transfer objects

pub mod claims;
pub mod health;
