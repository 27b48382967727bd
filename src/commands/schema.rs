//! `subplay schema`: print the classified schema as the explorer lists it.

use std::path::PathBuf;

use anyhow::Result;
use crossterm::style::Stylize;

use crate::playground::{self, Settings};
use crate::schema::classify::{CHILDREN_MARKER, RenderModel, Row, classify};

pub fn run(file: Option<PathBuf>) -> Result<()> {
    let settings = Settings::load()?;
    let payload = playground::read_json(&settings.schema_path(file)?)?;
    let model = classify(&payload);

    if model.is_empty() {
        println!("  No types.");
        return Ok(());
    }
    for (row, text) in model.rows().into_iter().zip(listing(&model)) {
        match row {
            Row::Separator(_) => println!("{}", text.dark_grey()),
            Row::Header(_) => println!("{}", text.cyan().bold()),
            Row::Field { .. } => println!("{text}"),
        }
    }
    Ok(())
}

/// Uncoloured listing of the render model, one line per row.
fn listing(model: &RenderModel) -> Vec<String> {
    model
        .rows()
        .into_iter()
        .map(|row| match row {
            Row::Separator(category) => format!("── {} ──", category.label()),
            Row::Header(ty) => format!("  {}", ty.display_name),
            Row::Field { field, .. } if field.has_children => {
                format!("    {} {}", field.name, CHILDREN_MARKER)
            }
            Row::Field { field, .. } => format!("    {}", field.name),
        })
        .collect()
}
