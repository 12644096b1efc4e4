//! # Vocal Core
//!
//! The domain layer of the Vocal blog API.
//! This crate contains the blog post model, its validation rules and the
//! repository port, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
