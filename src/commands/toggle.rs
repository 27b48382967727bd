//! `subplay toggle`: add or remove one field in a query document.

use std::path::PathBuf;

use anyhow::Result;

use crate::playground::Settings;
use crate::query::toggle::toggle_field;

pub fn run(type_name: &str, field_name: &str, query: Option<PathBuf>) -> Result<()> {
    let settings = Settings::load()?;
    let document = settings.query(query)?;
    println!("{}", toggle_field(&document, type_name, field_name));
    Ok(())
}
