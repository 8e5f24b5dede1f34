//! Stable value types shared across the targetid workspace.
//!
//! This crate is intentionally boring:
//! - the `TargetId` identifier string
//! - purl scheme names and literals
//! - the repository identity DTO

#![forbid(unsafe_code)]

pub mod id;
pub mod ids;
pub mod repo;

pub use id::TargetId;
pub use repo::RepoIdentity;
