//! Type definitions for tabgen
//!
//! This crate contains shared type definitions used across the tabgen codebase,
//! including shell selectors, completion strategies, and path hints.

pub mod hint;
pub mod shell;
pub mod strategy;

pub use hint::{PathHint, PathKind, Requirement};
pub use shell::Shell;
pub use strategy::CompletionStrategy;
