//! Name transforms shared by the query editor and the schema explorer.
//!
//! These are deliberately naive: pluralization only appends `s`, and block ids
//! lowercase exactly the first two characters of a type name. Both match the
//! query shapes the subgraph gateway accepts for its entity collections.

/// Append `s` unless the name already ends with `s`.
///
/// Irregular plurals are not modelled.
pub fn pluralize(name: &str) -> String {
    if name.ends_with('s') {
        name.to_string()
    } else {
        format!("{name}s")
    }
}

/// Derive the collection block id for a schema type name.
///
/// The first two characters are lowercased and the result is pluralized:
/// `Token` becomes `tokens`, `LPPosition` becomes `lpPositions`.
pub fn block_id(type_name: &str) -> String {
    let split = type_name
        .char_indices()
        .nth(2)
        .map(|(idx, _)| idx)
        .unwrap_or(type_name.len());
    let (head, rest) = type_name.split_at(split);
    pluralize(&format!("{}{}", head.to_lowercase(), rest))
}

/// Strip one trailing underscore from a field name.
///
/// Subgraph schemas suffix some fields with `_` to avoid clashing with
/// reserved words; the selectable name drops it.
pub fn clean_field_name(field_name: &str) -> &str {
    field_name.strip_suffix('_').unwrap_or(field_name)
}

/// The presentation name of a type: one leading underscore removed.
pub fn display_name(type_name: &str) -> &str {
    type_name.strip_prefix('_').unwrap_or(type_name)
}
