//! Locate a selection block by id inside a query document.

use std::ops::Range;

use regex::Regex;

/// The first block in a document whose head matches a block id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMatch<'a> {
    /// Text between the argument parentheses, if the block has an argument list.
    pub args: Option<&'a str>,
    /// Raw selection text between `{` and `}`.
    pub fields: &'a str,
    /// Byte range of the whole block, head through closing brace.
    pub span: Range<usize>,
    /// Byte range of the head: id, optional arguments and the opening brace.
    pub head: Range<usize>,
}

/// Find the first `id(args) { fields }` block in `document`.
///
/// The argument list is optional. The body may not contain `}`, so a block
/// with nested selections matches only up to its first inner closing brace.
/// When the same id appears twice only the first occurrence is returned.
pub fn locate<'a>(document: &'a str, id: &str) -> Option<BlockMatch<'a>> {
    let pattern = block_pattern(id)?;
    let caps = pattern.captures(document)?;

    let whole = caps.get(0)?;
    let head = caps.name("head")?;
    let fields = caps.name("fields")?;

    Some(BlockMatch {
        args: caps.name("args").map(|m| m.as_str()),
        fields: fields.as_str(),
        span: whole.range(),
        head: head.range(),
    })
}

fn block_pattern(id: &str) -> Option<Regex> {
    let pattern = String::from(r"(?P<head>\b")
        + &regex::escape(id)
        + r"\s*(?:\((?P<args>[^)]*)\))?\s*\{)(?P<fields>[^}]*)\}";
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            tracing::warn!(id, %err, "could not build block pattern");
            None
        }
    }
}
