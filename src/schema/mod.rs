//! Introspected schema model, classification into display categories, and
//! derived views (outline, holistic query).

pub mod classify;
pub mod holistic;
pub mod model;
pub mod outline;

/// Introspection query whose response `classify`, `outline` and
/// `holistic_query` consume.
pub const INTROSPECTION_QUERY: &str = "\
query {
  __schema {
    types {
      name
      kind
      description
      fields {
        name
        description
        args {
          name
        }
        type {
          name
          kind
          ofType {
            name
            kind
            ofType {
              name
              kind
            }
          }
        }
      }
    }
  }
}";
