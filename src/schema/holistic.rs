//! The "holistic" query: every argument-free root field in one request, and
//! pruning of empty values out of its result.

use anyhow::{Result, bail};
use serde_json::{Map, Value};

use crate::schema::model::SchemaType;

/// Name of the root query type.
pub const QUERY_TYPE: &str = "Query";

/// Build `{ a b c }` from the fields of the `Query` type that take no
/// arguments.
///
/// Fields fetched without argument information are treated as argument-free.
pub fn holistic_query(types: &[SchemaType]) -> Result<String> {
    let Some(query) = types.iter().find(|t| t.name == QUERY_TYPE) else {
        bail!("no `{QUERY_TYPE}` type in schema");
    };

    let fields: Vec<&str> = query
        .fields()
        .iter()
        .filter(|f| !f.takes_arguments())
        .map(|f| f.name.as_str())
        .collect();
    tracing::debug!(?fields, "collected argument-free root fields");

    if fields.is_empty() {
        bail!("`{QUERY_TYPE}` has no fields that can be selected without arguments");
    }
    Ok(format!("{{ {} }}", fields.join(" ")))
}

/// Drop `null`, `""` and `[]` values from a query result.
///
/// Object members are removed outright. Inside arrays a removed element is
/// replaced by `null` so positions are kept. Emptiness is checked before
/// descending, so a container emptied by pruning is kept. Returns `None` when
/// the root itself is empty.
pub fn prune_empty(value: Value) -> Option<Value> {
    if is_empty_value(&value) {
        return None;
    }
    Some(prune_children(value))
}

fn prune_children(value: Value) -> Value {
    match value {
        Value::Object(members) => Value::Object(
            members
                .into_iter()
                .filter_map(|(key, v)| prune_empty(v).map(|v| (key, v)))
                .collect::<Map<_, _>>(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|v| prune_empty(v).unwrap_or(Value::Null))
                .collect(),
        ),
        other => other,
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
