//! `subplay init`: write a default `subplay.conf` in the current directory.

use std::fs;
use std::path::Path;

use anyhow::{Result, bail};
use crossterm::style::Stylize;

use crate::parser::config::{self, Config};
use crate::playground::CONFIG_FILE;

pub fn run() -> Result<()> {
    let root = std::env::current_dir()?;
    run_in(&root)
}

pub fn run_in(root: &Path) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    if path.exists() {
        bail!("{CONFIG_FILE} already exists in {}", root.display());
    }

    fs::write(&path, config::serialize(&Config::default()))?;
    println!("  {} {}", "Created".green().bold(), CONFIG_FILE);
    println!(
        "  {}",
        "Save a `subplay introspect` response and point `schema:` at it.".dark_grey()
    );
    Ok(())
}
