//! `subplay prune`: pretty-print a query result without empty values.

use std::path::PathBuf;

use anyhow::Result;

use crate::playground::{self, STDIN};
use crate::schema::holistic::prune_empty;

pub fn run(file: Option<PathBuf>) -> Result<()> {
    let path = file.unwrap_or_else(|| PathBuf::from(STDIN));
    let result = playground::read_json(&path)?;
    if let Some(pruned) = prune_empty(result) {
        println!("{}", serde_json::to_string_pretty(&pruned)?);
    }
    Ok(())
}
