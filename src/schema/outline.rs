//! Plain-text outline of every type in a schema, one `- field: Type` line per
//! field.

use crate::schema::model::{SchemaField, SchemaType};

const UNKNOWN_TYPE: &str = "Not Available";

/// Render all types, meta-types included, in payload order.
pub fn outline(types: &[SchemaType]) -> String {
    types
        .iter()
        .map(outline_type)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn outline_type(ty: &SchemaType) -> String {
    let fields = ty
        .fields()
        .iter()
        .map(outline_field)
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}:\n{}", ty.name, fields)
}

fn outline_field(field: &SchemaField) -> String {
    let type_name = field.type_ref.resolved_name().unwrap_or(UNKNOWN_TYPE);
    let mut line = format!("- {}: {}", field.name, type_name);

    let nested = field
        .type_ref
        .of_type
        .as_deref()
        .and_then(|t| t.of_type.as_deref())
        .and_then(|t| t.name.as_deref());
    if let Some(name) = nested {
        line.push_str("\n  ");
        line.push_str(name);
    }
    line
}
