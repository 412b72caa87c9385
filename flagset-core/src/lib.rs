#![no_std]

//! Flagset Core - flag width definitions and validation
//!
//! This crate provides the integer capability trait and the pure
//! single-bit checks behind typed flag sets. It holds no global state.

pub mod error;
pub mod traits;
pub mod validation;

pub use error::*;
pub use traits::*;
pub use validation::*;
