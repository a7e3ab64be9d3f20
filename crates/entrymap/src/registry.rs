//! Process-wide capability slot for the entry-map builder
//!
//! The library's conversion can also be reached through a single well-known
//! process-wide slot, so that a host application can bind either the default
//! implementation or its own once during initialization. Binding is explicit
//! and first-writer-wins: an occupied slot is never overwritten, and repeated
//! installation attempts are no-ops.
//!
//! Copyright (c) 2026 Entrymap Team
//! Licensed under the Apache-2.0 license

use crate::entries::from_value_entries;
use crate::error::Result;
use serde_json::{Map, Value};
use std::sync::{Arc, OnceLock};

/// Capability interface for building a mapping from a dynamic entry source.
pub trait BuildEntryMap: Send + Sync {
    /// Convert `source` into a string-keyed mapping.
    ///
    /// Implementations follow the contract of
    /// [`from_value_entries`](crate::from_value_entries): `None` and null
    /// sources yield an empty mapping, malformed elements and non-string
    /// keys are hard failures.
    fn build_map(&self, source: Option<&Value>) -> Result<Map<String, Value>>;
}

/// The library's own builder implementation.
pub struct DefaultBuilder;

impl BuildEntryMap for DefaultBuilder {
    fn build_map(&self, source: Option<&Value>) -> Result<Map<String, Value>> {
        from_value_entries(source)
    }
}

static BUILDER: OnceLock<Arc<dyn BuildEntryMap>> = OnceLock::new();

/// Bind `builder` to the process-wide slot if it is still empty.
///
/// Returns `true` when this call performed the installation. A slot already
/// holding an implementation is left untouched and the call returns `false`.
pub fn install(builder: Arc<dyn BuildEntryMap>) -> bool {
    let installed = BUILDER.set(builder).is_ok();
    if installed {
        log::debug!("Entry-map builder installed in the process-wide slot");
    } else {
        log::debug!("Entry-map builder slot already occupied, keeping the existing implementation");
    }
    installed
}

/// Bind [`DefaultBuilder`] to the process-wide slot if it is still empty.
pub fn install_default() -> bool {
    install(Arc::new(DefaultBuilder))
}

/// Check whether the slot is occupied without invoking the builder.
pub fn is_installed() -> bool {
    BUILDER.get().is_some()
}

/// Fetch the installed builder, if any.
pub fn installed() -> Option<Arc<dyn BuildEntryMap>> {
    BUILDER.get().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    struct RejectingBuilder;

    impl BuildEntryMap for RejectingBuilder {
        fn build_map(&self, _source: Option<&Value>) -> Result<Map<String, Value>> {
            Err(Error::NotAnEntry { index: 0 })
        }
    }

    #[test]
    fn test_default_builder_delegates_to_conversion() {
        let source = json!([["a", 1]]);
        let map = DefaultBuilder.build_map(Some(&source)).unwrap();
        assert_eq!(map["a"], json!(1));
    }

    // The slot is shared process state, so one test exercises the whole
    // install lifecycle to avoid ordering dependencies between tests.
    #[test]
    fn test_installation_is_first_writer_wins() {
        assert!(!is_installed());
        assert!(install_default());
        assert!(is_installed());

        // Second attempt never overwrites, whatever the implementation
        assert!(!install_default());
        assert!(!install(Arc::new(RejectingBuilder)));

        // The originally bound builder is still the one in the slot
        let builder = installed().expect("builder should be installed");
        let source = json!([["k", "v"]]);
        let map = builder.build_map(Some(&source)).unwrap();
        assert_eq!(map["k"], json!("v"));
    }
}
