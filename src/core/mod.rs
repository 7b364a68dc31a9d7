//! Core library components.
//!
//! Path parsing, the tree mutation and lookup engine, and the stores it
//! runs against.

pub mod config;
pub mod constants;
pub mod domain;
pub mod materialize;
pub mod path;
pub mod reader;
pub mod resolve;
pub mod secrets;
pub mod store;
pub mod types;
pub mod writer;
