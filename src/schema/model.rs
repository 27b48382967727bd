use serde::{Deserialize, Deserializer};
use serde::de::IgnoredAny;
use serde_json::Value;

/// Prefix reserved for introspection meta-types (`__Schema`, `__Type`, ...).
pub const META_PREFIX: &str = "__";

/// The `kind` of an introspected type reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
    #[serde(other)]
    Other,
}

/// A field's type as returned by introspection.
///
/// Wrapping kinds (`NON_NULL`, `LIST`) have no name and point at the wrapped
/// type through `of_type`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub kind: Option<TypeKind>,
    #[serde(default)]
    pub of_type: Option<Box<TypeRef>>,
}

impl TypeRef {
    /// True when this reference or its immediate `of_type` is an object or a list.
    ///
    /// Deeper wrapping is not inspected.
    pub fn has_children(&self) -> bool {
        is_composite(self.kind)
            || self
                .of_type
                .as_deref()
                .is_some_and(|inner| is_composite(inner.kind))
    }

    /// The first name found on this reference or its immediate `of_type`.
    pub fn resolved_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .or_else(|| self.of_type.as_deref().and_then(|t| t.name.as_deref()))
    }
}

fn is_composite(kind: Option<TypeKind>) -> bool {
    matches!(kind, Some(TypeKind::Object | TypeKind::List))
}

#[derive(Debug, Clone, Deserialize)]
pub struct SchemaField {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// An explicit `null` is read like a missing key.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub type_ref: TypeRef,
    /// Only the count matters; `None` when the payload was fetched without
    /// requesting arguments.
    #[serde(default)]
    pub args: Option<Vec<IgnoredAny>>,
}

impl SchemaField {
    pub fn takes_arguments(&self) -> bool {
        self.args.as_ref().is_some_and(|args| !args.is_empty())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A named type from the introspected schema.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaType {
    pub name: String,
    /// Introspection reports `null` for types that cannot have fields.
    #[serde(default)]
    pub fields: Option<Vec<SchemaField>>,
}

impl SchemaType {
    /// Fields in payload order; empty for scalars, enums and inputs.
    pub fn fields(&self) -> &[SchemaField] {
        self.fields.as_deref().unwrap_or_default()
    }

    pub fn display_name(&self) -> &str {
        crate::query::names::display_name(&self.name)
    }

    pub fn is_meta(&self) -> bool {
        self.name.starts_with(META_PREFIX)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields().iter().any(|f| f.name == name)
    }
}

/// Read the type list out of an introspection response.
///
/// Looks under `data.__schema.types`. A payload without that path yields no
/// types, and entries that do not look like a type are skipped.
pub fn types_from_payload(payload: &Value) -> Vec<SchemaType> {
    let Some(entries) = payload
        .pointer("/data/__schema/types")
        .and_then(Value::as_array)
    else {
        tracing::debug!("introspection payload has no type list");
        return Vec::new();
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(idx, entry)| match SchemaType::deserialize(entry) {
            Ok(ty) => Some(ty),
            Err(err) => {
                tracing::debug!(idx, %err, "skipping malformed type entry");
                None
            }
        })
        .collect()
}
