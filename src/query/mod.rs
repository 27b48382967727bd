//! Query document editing: name derivation, block lookup, field toggling and
//! canonical formatting.

pub mod format;
pub mod locate;
pub mod names;
pub mod toggle;

/// The document a session starts from when no query file is given.
pub const DEFAULT_QUERY: &str = "{\n  _meta {\n    deployment\n  }\n}";
