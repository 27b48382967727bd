//! `subplay outline`: print every type with its fields and field types.

use std::path::PathBuf;

use anyhow::Result;

use crate::playground::{self, Settings};
use crate::schema::model::types_from_payload;
use crate::schema::outline::outline;

pub fn run(file: Option<PathBuf>) -> Result<()> {
    let settings = Settings::load()?;
    let payload = playground::read_json(&settings.schema_path(file)?)?;
    let types = types_from_payload(&payload);
    if types.is_empty() {
        println!("  No types.");
    } else {
        println!("{}", outline(&types));
    }
    Ok(())
}
