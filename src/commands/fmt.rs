//! `subplay fmt`: print a query document in canonical form.

use std::path::PathBuf;

use anyhow::Result;

use crate::playground::Settings;
use crate::query::format::format;

pub fn run(query: Option<PathBuf>) -> Result<()> {
    let settings = Settings::load()?;
    let document = settings.query(query)?;
    println!("{}", format(&document));
    Ok(())
}
