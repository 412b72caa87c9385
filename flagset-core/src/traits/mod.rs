//! Abstract interfaces for flag sets
//!
//! Defines the capability an integer type needs to back a flag set.

pub mod flag;

pub use flag::Flag;
