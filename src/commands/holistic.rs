//! `subplay holistic`: print a query selecting every argument-free root field.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::playground::{self, Settings};
use crate::schema::holistic::holistic_query;
use crate::schema::model::types_from_payload;

pub fn run(file: Option<PathBuf>) -> Result<()> {
    let settings = Settings::load()?;
    let path = settings.schema_path(file)?;
    let payload = playground::read_json(&path)?;
    let query = holistic_query(&types_from_payload(&payload))
        .with_context(|| format!("cannot build a holistic query from {}", path.display()))?;
    println!("{query}");
    Ok(())
}
