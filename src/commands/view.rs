//! `subplay view`: browse a schema and build a query interactively.

use std::path::PathBuf;

use anyhow::Result;

use crate::playground::{self, Settings};
use crate::query::toggle::toggle_field;
use crate::schema::classify::{Category, RenderModel, classify};
use crate::tui::explorer::{self, Explorer};

pub fn run(file: Option<PathBuf>, query: Option<PathBuf>) -> Result<()> {
    let settings = Settings::load()?;
    let payload = playground::read_json(&settings.schema_path(file)?)?;
    let document = settings.query(query)?;

    let model = visible_model(classify(&payload), settings.config.show_empty_types);
    tracing::info!(types = model.type_count(), "classified schema");
    let app = Explorer::new(&model, document, toggle_field)
        .with_descriptions(settings.config.show_descriptions);

    let final_query = explorer::run(app)?;
    println!("{final_query}");
    Ok(())
}

fn visible_model(mut model: RenderModel, show_empty_types: bool) -> RenderModel {
    if !show_empty_types {
        model.sections.retain(|s| s.category != Category::Empty);
    }
    model
}
