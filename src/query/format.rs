//! Canonical brace-indented formatting for query documents.
//!
//! The formatter is line based and never parses: indentation is derived from
//! whether each trimmed line contains `{` or `}`. Because it only looks at
//! trimmed content, `format(format(x)) == format(x)` for any input.

const INDENT: &str = "  ";

/// Argument keys that get an extra indent step inside an argument list.
const ARGUMENT_KEYS: [&str; 3] = ["first", "orderBy", "orderDirection"];

/// Re-indent `text` into canonical form.
///
/// Blank lines are dropped. A line containing `}` is dedented before it is
/// written; a line containing `{` indents the lines after it. Pagination
/// argument lines keep one extra indent step. The level never goes below zero,
/// so unbalanced input still produces output.
pub fn format(text: &str) -> String {
    let mut level = 0usize;
    let mut out = Vec::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if line.contains('}') {
            level = level.saturating_sub(1);
        }

        let mut prefix = INDENT.repeat(level);
        if is_argument_line(line) {
            prefix.push_str(INDENT);
        }
        out.push(format!("{prefix}{line}"));

        if line.contains('{') {
            level += 1;
        }
    }

    out.join("\n").trim().to_string()
}

fn is_argument_line(line: &str) -> bool {
    ARGUMENT_KEYS.iter().any(|key| {
        line.strip_prefix(key)
            .is_some_and(|rest| !rest.starts_with(|c: char| c.is_alphanumeric() || c == '_'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_indents_nested_blocks() {
        let input = "{\ntokens {\nname\nsymbol\n}\n}";
        assert_eq!(format(input), "{\n  tokens {\n    name\n    symbol\n  }\n}");
    }

    #[test]
    fn format_drops_blank_lines_and_trims() {
        let input = "\n\n   {\n\n      _meta {   \n deployment\n   }\n\n}\n\n";
        assert_eq!(format(input), "{\n  _meta {\n    deployment\n  }\n}");
    }

    #[test]
    fn format_offsets_pagination_arguments() {
        let input = "{\ntokens(\nfirst: 5,\norderBy: id,\norderDirection: asc\n) {\nname\n}\n}";
        assert_eq!(
            format(input),
            "{\n  tokens(\n    first: 5,\n    orderBy: id,\n    orderDirection: asc\n  ) {\n    name\n  }\n}"
        );
    }

    #[test]
    fn format_offsets_only_whole_argument_tokens() {
        let input = "{\ntokens {\nfirstTradeTimestamp\nfirst\n}\n}";
        assert_eq!(
            format(input),
            "{\n  tokens {\n    firstTradeTimestamp\n      first\n  }\n}"
        );
    }

    #[test]
    fn format_handles_single_line_documents() {
        assert_eq!(
            format("  { _meta { deployment } }  "),
            "{ _meta { deployment } }"
        );
    }

    #[test]
    fn format_never_indents_below_zero() {
        assert_eq!(format("}\n}\nname"), "}\n}\nname");
    }

    #[test]
    fn format_is_idempotent() {
        let inputs = [
            "{\ntokens(first: 10) {\nlastPriceUSD\nname\n      symbol\n}\n}",
            "{\n\n  pools(\n first: 5,\n    orderBy: id,\norderDirection: asc\n) {\nid\n}\n}",
            "{ _meta { deployment } }",
            "",
        ];
        for input in inputs {
            let once = format(input);
            assert_eq!(format(&once), once, "format is not idempotent for {input:?}");
        }
    }

    #[test]
    fn format_empty_input_is_empty() {
        assert_eq!(format(""), "");
        assert_eq!(format("\n   \n"), "");
    }
}
