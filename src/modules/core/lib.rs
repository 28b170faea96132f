//! Core domain logic for tabgen
//!
//! This crate contains the command tree model, the per-node definition records
//! produced while walking it, generator settings, and the error type shared by
//! every tabgen crate.

pub mod domain;
pub mod error;

pub use domain::*;
pub use error::{Result, TabgenError};
