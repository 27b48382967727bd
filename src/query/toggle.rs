//! Add or remove a single field in a query document.
//!
//! The document is plain text. Each toggle locates the target block by its
//! derived id, patches the text, and re-runs the canonical formatter over the
//! whole result. No parse tree is kept between edits.

use std::collections::BTreeSet;

use crate::query::format::format;
use crate::query::locate::{BlockMatch, locate};
use crate::query::names;

/// Argument lines given to a newly created collection block.
pub const DEFAULT_ARGUMENTS: [&str; 3] = ["first: 5,", "orderBy: id,", "orderDirection: asc"];

/// Toggle `field_name` inside the block for `type_name`.
///
/// If the block exists, the field is removed when present and added
/// otherwise; the remaining fields are sorted one per line, and a block left
/// without fields is removed entirely. If no block exists, one is created with
/// the default pagination arguments just before the document's final `}`.
/// The result is always canonically formatted.
///
/// The block body ends at its first `}`. A block holding a nested selection
/// such as `token0 { id }` is therefore flattened by the rewrite and the
/// nested fields are lost, so fields that need a sub-selection are best
/// edited by hand.
pub fn toggle_field(document: &str, type_name: &str, field_name: &str) -> String {
    let id = names::block_id(type_name);
    let field = names::clean_field_name(field_name);
    if field.is_empty() {
        tracing::debug!(type_name, field_name, "ignoring toggle of empty field name");
        return format(document);
    }

    let edited = match locate(document, &id) {
        Some(block) => rewrite_block(document, &block, field),
        None => {
            tracing::debug!(block = %id, field, "creating block");
            insert_block(document, &id, field)
        }
    };
    format(&edited)
}

/// The field names currently selected in the first block with `id`.
///
/// Empty when the block does not exist.
pub fn field_set(document: &str, id: &str) -> BTreeSet<String> {
    locate(document, id)
        .map(|block| {
            block
                .fields
                .split_whitespace()
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn rewrite_block(document: &str, block: &BlockMatch<'_>, field: &str) -> String {
    let mut fields: Vec<&str> = block.fields.split_whitespace().collect();
    if fields.contains(&field) {
        fields.retain(|f| *f != field);
    } else {
        fields.push(field);
    }
    fields.sort_unstable();
    fields.dedup();

    let mut out = String::with_capacity(document.len() + field.len() + 2);
    out.push_str(&document[..block.span.start]);
    if fields.is_empty() {
        tracing::debug!(field, "removing emptied block");
    } else {
        tracing::trace!(
            field,
            args = block.args.unwrap_or_default(),
            count = fields.len(),
            "rewriting block body"
        );
        out.push_str(&document[block.head.clone()]);
        out.push('\n');
        out.push_str(&fields.join("\n"));
        out.push_str("\n}");
    }
    out.push_str(&document[block.span.end..]);
    out
}

fn insert_block(document: &str, id: &str, field: &str) -> String {
    let block = format!(
        "\n{id}(\n{}\n) {{\n{field}\n}}\n",
        DEFAULT_ARGUMENTS.join("\n")
    );
    match document.rfind('}') {
        Some(idx) => format!("{}{}{}", &document[..idx], block, &document[idx..]),
        None => format!("{document}{block}"),
    }
}
