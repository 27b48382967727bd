//! Config discovery and input loading shared by the commands.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::parser::config::{self, Config};
use crate::query::DEFAULT_QUERY;

pub const CONFIG_FILE: &str = "subplay.conf";

/// Argument value that reads from stdin instead of a file.
pub const STDIN: &str = "-";

/// A loaded config together with the directory its relative paths refer to.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub config: Config,
    pub base: Option<PathBuf>,
}

impl Settings {
    /// Load the nearest `subplay.conf` above the current directory, or
    /// defaults when there is none.
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::load_from(&cwd)
    }

    pub fn load_from(start: &Path) -> Result<Self> {
        let Some(path) = find_config_from(start) else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config =
            config::parse(&content).with_context(|| format!("invalid {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(Self {
            config,
            base: path.parent().map(Path::to_path_buf),
        })
    }

    /// The schema file to read: the argument if given, else the configured one.
    pub fn schema_path(&self, arg: Option<PathBuf>) -> Result<PathBuf> {
        match arg {
            Some(p) => Ok(p),
            None => match &self.config.schema {
                Some(p) => Ok(self.resolve(p)),
                None => bail!(
                    "no schema file given and no `schema:` entry in {CONFIG_FILE} (save the `subplay introspect` response and pass its path)"
                ),
            },
        }
    }

    /// The query document to start from: the argument, the configured file,
    /// or the built-in default.
    pub fn query(&self, arg: Option<PathBuf>) -> Result<String> {
        let path = arg.or_else(|| self.config.query.as_deref().map(|p| self.resolve(p)));
        match path {
            Some(p) => read_input(&p),
            None => Ok(DEFAULT_QUERY.to_string()),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

/// Walk upward from `start` to find `subplay.conf`.
pub fn find_config_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE))
        .find(|candidate| candidate.is_file())
}

/// Read a file, or stdin when `path` is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new(STDIN) {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Read and decode a JSON document such as an introspection response.
pub fn read_json(path: &Path) -> Result<Value> {
    let content = read_input(path)?;
    let value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    tracing::info!(path = %path.display(), bytes = content.len(), "loaded JSON");
    Ok(value)
}
