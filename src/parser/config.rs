//! Parser and writer for `subplay.conf`.
//!
//! The format is line oriented: `key: value`, with `#` comments and blank
//! lines ignored. Paths are kept as written; callers resolve them against the
//! directory holding the file.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Saved introspection payload used when no schema file is given.
    pub schema: Option<PathBuf>,
    /// Starting query document used when no query file is given.
    pub query: Option<PathBuf>,
    /// List scalar, enum and input types in the explorer.
    pub show_empty_types: bool,
    /// Show the selected field's description in the explorer.
    pub show_descriptions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: None,
            query: None,
            show_empty_types: true,
            show_descriptions: true,
        }
    }
}

pub fn parse(content: &str) -> Result<Config> {
    let mut cfg = Config::default();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            bail!("invalid config line {}: expected `key: value`", idx + 1);
        };
        let value = value.trim();

        match key.trim() {
            "schema" => cfg.schema = optional_path(value),
            "query" => cfg.query = optional_path(value),
            "show_empty_types" => {
                cfg.show_empty_types = parse_bool(value)
                    .with_context(|| format!("invalid value at config line {}", idx + 1))?;
            }
            "show_descriptions" => {
                cfg.show_descriptions = parse_bool(value)
                    .with_context(|| format!("invalid value at config line {}", idx + 1))?;
            }
            other => bail!("unknown config key '{}' at line {}", other, idx + 1),
        }
    }

    Ok(cfg)
}

pub fn serialize(cfg: &Config) -> String {
    let path = |p: &Option<PathBuf>| {
        p.as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    };
    format!(
        "\
# subplay configuration

# Saved introspection response (JSON) to explore when no file is given
schema: {}

# Starting query document (defaults to a `_meta {{ deployment }}` query)
query: {}

# List scalars, enums and input types in `subplay view`
show_empty_types: {}

# Show field descriptions in `subplay view`
show_descriptions: {}
",
        path(&cfg.schema),
        path(&cfg.query),
        cfg.show_empty_types,
        cfg.show_descriptions
    )
}

fn optional_path(value: &str) -> Option<PathBuf> {
    (!value.is_empty()).then(|| PathBuf::from(value))
}

fn parse_bool(value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => bail!("expected `true` or `false`, found '{}'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_gives_defaults() {
        assert_eq!(parse("").unwrap(), Config::default());
        assert_eq!(parse("# only a comment\n\n").unwrap(), Config::default());
    }

    #[test]
    fn parse_all_keys() {
        let cfg = parse(
            "schema: schema/uniswap.json\nquery:  queries/pools.graphql \nshow_empty_types: false\nshow_descriptions: false\n",
        )
        .unwrap();
        assert_eq!(cfg.schema, Some(PathBuf::from("schema/uniswap.json")));
        assert_eq!(cfg.query, Some(PathBuf::from("queries/pools.graphql")));
        assert!(!cfg.show_empty_types);
        assert!(!cfg.show_descriptions);
    }

    #[test]
    fn parse_blank_path_is_none() {
        let cfg = parse("schema:\nquery:   \n").unwrap();
        assert_eq!(cfg.schema, None);
        assert_eq!(cfg.query, None);
    }

    #[test]
    fn parse_rejects_unknown_key() {
        let err = parse("\nendpoint: https://example.com\n").unwrap_err();
        assert!(err.to_string().contains("unknown config key 'endpoint' at line 2"));
    }

    #[test]
    fn parse_rejects_bad_bool_and_missing_colon() {
        assert!(parse("show_empty_types: yes").is_err());
        assert!(parse("schema").is_err());
    }

    #[test]
    fn serialize_round_trips_through_parse() {
        let cfg = Config {
            schema: Some(PathBuf::from("schema.json")),
            query: None,
            show_empty_types: false,
            show_descriptions: true,
        };
        assert_eq!(parse(&serialize(&cfg)).unwrap(), cfg);
        assert_eq!(parse(&serialize(&Config::default())).unwrap(), Config::default());
    }
}
