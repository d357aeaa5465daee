//! Centralized constants for the vm-import utilities.
//!
//! Naming limits, the controller config record name, its keys and defaults
//! all live here so the library crates and the CLI agree on them.

pub mod config;
pub mod naming;
