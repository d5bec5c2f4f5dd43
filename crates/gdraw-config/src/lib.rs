//! # gdraw Config
//!
//! Type-safe drawer configuration for gdraw.
//!
//! This crate provides the configuration schema, defaults, validation, and
//! TOML loading with environment variable overrides.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
