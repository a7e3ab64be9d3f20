//! Entrymap - insertion-ordered string-keyed mappings from entry sequences
//!
//! This crate converts finite sequences of key/value entries into mappings
//! with string keys and arbitrary JSON-shaped values, mirroring the lenient
//! entry handling of host-engine map constructors while rejecting non-string
//! keys outright so the result always lists back the entries that built it.
//!
//! # Main Components
//!
//! - **Error Handling**: Error types using `thiserror`
//! - **Entry Conversion**: Build mappings from typed iterators, dynamic JSON
//!   values, or JSON text
//! - **Capability Registry**: Explicit one-time installation of a builder
//!   implementation in a process-wide slot
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let map = entrymap::from_entries(Some(vec![
//!     json!(["name", "entrymap"]),
//!     json!(["stable", true]),
//! ]))?;
//! assert_eq!(map["name"], json!("entrymap"));
//! # entrymap::Result::Ok(())
//! ```

pub mod entries;
pub mod error;
pub mod registry;

// Re-export the main surface for convenience
pub use entries::{from_entries, from_entries_json, from_value_entries};
pub use error::{Error, Result};
pub use registry::{install, install_default, installed, is_installed, BuildEntryMap, DefaultBuilder};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
