//! Core types and trait definitions for the sock drawer.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The store backend and the web layer both depend on it.

pub mod error;
pub mod sock;
pub mod store;
pub mod validate;
pub mod vocab;

pub use error::{Error, Result};
