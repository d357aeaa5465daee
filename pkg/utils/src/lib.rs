//! Normalization and formatting helpers for the VM import controller.
//!
//! Every function here is a pure value transform: no shared state, no I/O,
//! safe to call from any thread.

pub mod bytes;
pub mod error;
pub mod label;
pub mod name;
pub mod offset;
pub mod timezone;

pub use bytes::{format_bytes, parse_bytes};
pub use error::UtilError;
pub use label::ensure_label_length;
pub use name::normalize_name;
pub use offset::parse_offset_seconds;
pub use timezone::is_utc_compatible;
