//! Partition an introspected schema into display categories and build the
//! ordered render model the explorer draws.

use std::cmp::Ordering;

use serde_json::Value;

use crate::schema::model::{SchemaType, types_from_payload};

/// Display category of a non-meta schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Has fields, one of them named exactly `id`.
    WithIdAndFields,
    /// Has fields, none named `id`.
    FieldsNoId,
    /// Has no fields at all.
    Empty,
}

impl Category {
    /// Render order of the sections.
    pub const ORDER: [Category; 3] = [Self::WithIdAndFields, Self::FieldsNoId, Self::Empty];

    pub fn of(ty: &SchemaType) -> Self {
        if ty.fields().is_empty() {
            Self::Empty
        } else if ty.has_field("id") {
            Self::WithIdAndFields
        } else {
            Self::FieldsNoId
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::WithIdAndFields => "entities",
            Self::FieldsNoId => "objects without id",
            Self::Empty => "scalars, enums and inputs",
        }
    }
}

/// Marker drawn after fields that need a nested selection.
pub const CHILDREN_MARKER: &str = "▸";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry {
    pub name: String,
    pub description: Option<String>,
    /// The field's value is an object or a list and needs a nested selection.
    pub has_children: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEntry {
    /// Schema name, used for block ids and toggling.
    pub name: String,
    /// Presentation name, used for display and ordering only.
    pub display_name: String,
    pub fields: Vec<FieldEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub category: Category,
    pub types: Vec<TypeEntry>,
}

/// One drawable line of the render model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row<'a> {
    Separator(Category),
    Header(&'a TypeEntry),
    Field {
        owner: &'a TypeEntry,
        field: &'a FieldEntry,
    },
}

/// Ordered, read-only view of a classified schema.
///
/// Sections appear in [`Category::ORDER`]; sections without types are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderModel {
    pub sections: Vec<Section>,
}

impl RenderModel {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section(&self, category: Category) -> Option<&Section> {
        self.sections.iter().find(|s| s.category == category)
    }

    pub fn type_count(&self) -> usize {
        self.sections.iter().map(|s| s.types.len()).sum()
    }

    /// Flatten into rows: a separator before each section, then every type
    /// header followed by its field rows.
    pub fn rows(&self) -> Vec<Row<'_>> {
        let mut rows = Vec::new();
        for section in &self.sections {
            rows.push(Row::Separator(section.category));
            for ty in &section.types {
                rows.push(Row::Header(ty));
                rows.extend(ty.fields.iter().map(|field| Row::Field { owner: ty, field }));
            }
        }
        rows
    }
}

/// Classify an introspection response into a render model.
///
/// Never fails: a payload without a type list yields an empty model.
pub fn classify(payload: &Value) -> RenderModel {
    classify_types(types_from_payload(payload))
}

/// Classify already-decoded schema types.
pub fn classify_types(types: Vec<SchemaType>) -> RenderModel {
    let mut buckets: [Vec<SchemaType>; 3] = Default::default();
    let mut meta = 0usize;
    for ty in types {
        if ty.is_meta() {
            meta += 1;
            continue;
        }
        let slot = match Category::of(&ty) {
            Category::WithIdAndFields => 0,
            Category::FieldsNoId => 1,
            Category::Empty => 2,
        };
        buckets[slot].push(ty);
    }

    let mut sections = Vec::new();
    for (category, mut bucket) in Category::ORDER.into_iter().zip(buckets) {
        if bucket.is_empty() {
            continue;
        }
        bucket.sort_by(|a, b| compare_display_names(a.display_name(), b.display_name()));
        let types = bucket
            .iter()
            .map(|ty| type_entry(ty, category))
            .collect::<Vec<_>>();
        sections.push(Section { category, types });
    }

    let model = RenderModel { sections };
    let count = |category| model.section(category).map_or(0, |s| s.types.len());
    tracing::debug!(
        meta,
        entities = count(Category::WithIdAndFields),
        objects = count(Category::FieldsNoId),
        empty = count(Category::Empty),
        "classified schema"
    );
    model
}

/// Case-insensitive order, falling back to byte order for names that only
/// differ by case.
fn compare_display_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn type_entry(ty: &SchemaType, category: Category) -> TypeEntry {
    let mut fields = Vec::new();
    if category != Category::Empty {
        fields = ty
            .fields()
            .iter()
            .map(|f| FieldEntry {
                name: f.name.clone(),
                description: f.description.clone(),
                has_children: f.type_ref.has_children(),
            })
            .collect();
        fields.sort_by(|a, b| a.name.cmp(&b.name));
    }
    TypeEntry {
        name: ty.name.clone(),
        display_name: ty.display_name().to_string(),
        fields,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use serde_json::json;

    fn payload(types: Value) -> Value {
        json!({ "data": { "__schema": { "types": types } } })
    }

    fn scalar_field(name: &str) -> Value {
        json!({ "name": name, "type": { "name": "String", "kind": "SCALAR" } })
    }

    fn names(section: Option<&Section>) -> Vec<&str> {
        section
            .map(|s| s.types.iter().map(|t| t.name.as_str()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn classify_example_types() {
        let model = classify(&payload(json!([
            { "name": "Transfer", "fields": [scalar_field("id"), scalar_field("amount")] },
            { "name": "Stats", "fields": [scalar_field("amount")] },
            { "name": "Empty", "fields": [] }
        ])));
        assert_eq!(names(model.section(Category::WithIdAndFields)), ["Transfer"]);
        assert_eq!(names(model.section(Category::FieldsNoId)), ["Stats"]);
        assert_eq!(names(model.section(Category::Empty)), ["Empty"]);
    }

    #[test]
    fn classify_keeps_types_with_null_field_types() {
        let model = classify(&payload(json!([
            { "name": "Token", "fields": [
                { "name": "id", "type": null },
                scalar_field("symbol")
            ] }
        ])));
        assert_eq!(model.type_count(), 1);
        assert_eq!(names(model.section(Category::WithIdAndFields)), ["Token"]);
        let token = &model.sections[0].types[0];
        assert!(token.fields.iter().all(|f| !f.has_children));
    }

    #[test]
    fn classify_drops_meta_types() {
        let model = classify(&payload(json!([
            { "name": "__Schema", "fields": [scalar_field("types")] },
            { "name": "__TypeKind", "fields": null },
            { "name": "_Meta_", "fields": [scalar_field("deployment")] }
        ])));
        assert_eq!(model.type_count(), 1);
        assert_eq!(names(model.section(Category::FieldsNoId)), ["_Meta_"]);
    }

    #[test]
    fn classify_is_a_total_disjoint_partition() {
        let input = json!([
            { "name": "Token", "fields": [scalar_field("id")] },
            { "name": "pool", "fields": [scalar_field("id"), scalar_field("fee")] },
            { "name": "_Meta_", "fields": [scalar_field("block")] },
            { "name": "Bundle", "fields": [scalar_field("price")] },
            { "name": "BigInt", "fields": null },
            { "name": "OrderDirection" },
            { "name": "__Type", "fields": [scalar_field("name")] },
            { "name": "Identity", "fields": [scalar_field("ID"), scalar_field("idx")] }
        ]);
        let model = classify(&payload(input));

        let mut seen = HashSet::new();
        for section in &model.sections {
            for ty in &section.types {
                assert!(seen.insert(ty.name.clone()), "{} appears twice", ty.name);
            }
        }
        let expected: HashSet<String> = [
            "Token", "pool", "_Meta_", "Bundle", "BigInt", "OrderDirection", "Identity",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        assert_eq!(seen, expected);
        assert_eq!(names(model.section(Category::FieldsNoId)), ["Bundle", "Identity", "_Meta_"]);
    }

    #[test]
    fn classify_sorts_by_display_name_case_insensitively() {
        let model = classify(&payload(json!([
            { "name": "swap", "fields": [scalar_field("id")] },
            { "name": "Pool", "fields": [scalar_field("id")] },
            { "name": "_Factory", "fields": [scalar_field("id")] },
            { "name": "burn", "fields": [scalar_field("id")] }
        ])));
        assert_eq!(
            names(model.section(Category::WithIdAndFields)),
            ["burn", "_Factory", "Pool", "swap"]
        );
    }

    #[test]
    fn classify_sort_is_stable_for_equal_display_names() {
        let model = classify(&payload(json!([
            { "name": "Pool", "fields": [scalar_field("id")] },
            { "name": "_Pool", "fields": [scalar_field("id")] },
            { "name": "Mint", "fields": [scalar_field("id")] }
        ])));
        assert_eq!(
            names(model.section(Category::WithIdAndFields)),
            ["Mint", "Pool", "_Pool"]
        );

        let model = classify(&payload(json!([
            { "name": "_Pool", "fields": [scalar_field("id")] },
            { "name": "Pool", "fields": [scalar_field("id")] }
        ])));
        assert_eq!(names(model.section(Category::WithIdAndFields)), ["_Pool", "Pool"]);
    }

    #[test]
    fn classify_breaks_case_ties_by_byte_order() {
        let model = classify(&payload(json!([
            { "name": "token", "fields": [scalar_field("id")] },
            { "name": "Token", "fields": [scalar_field("id")] }
        ])));
        assert_eq!(names(model.section(Category::WithIdAndFields)), ["Token", "token"]);
    }

    #[test]
    fn classify_sorts_fields_alphabetically_without_special_id() {
        let model = classify(&payload(json!([
            { "name": "Token", "fields": [
                scalar_field("symbol"), scalar_field("id"), scalar_field("Name"), scalar_field("decimals")
            ] }
        ])));
        let section = model.section(Category::WithIdAndFields).unwrap();
        let fields: Vec<_> = section.types[0].fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(fields, ["Name", "decimals", "id", "symbol"]);
    }

    #[test]
    fn classify_marks_fields_with_children() {
        let model = classify(&payload(json!([
            { "name": "Pool", "fields": [
                { "name": "id", "type": { "kind": "NON_NULL", "ofType": { "name": "ID", "kind": "SCALAR" } } },
                { "name": "token0", "description": "first token",
                  "type": { "kind": "NON_NULL", "ofType": { "name": "Token", "kind": "OBJECT" } } },
                { "name": "swaps", "type": { "kind": "LIST", "ofType": { "kind": "NON_NULL" } } }
            ] }
        ])));
        let fields = &model.section(Category::WithIdAndFields).unwrap().types[0].fields;
        let flags: Vec<_> = fields.iter().map(|f| (f.name.as_str(), f.has_children)).collect();
        assert_eq!(flags, [("id", false), ("swaps", true), ("token0", true)]);
        assert_eq!(fields[2].description.as_deref(), Some("first token"));
    }

    #[test]
    fn classify_malformed_payload_is_empty() {
        assert!(classify(&json!(null)).is_empty());
        assert!(classify(&json!({ "errors": [{ "message": "bad key" }] })).is_empty());
        assert!(classify(&json!({ "data": { "__schema": null } })).is_empty());
        assert!(classify(&payload(json!([]))).rows().is_empty());
    }

    #[test]
    fn rows_put_separators_before_each_section() {
        let model = classify(&payload(json!([
            { "name": "Transfer", "fields": [scalar_field("id"), scalar_field("amount")] },
            { "name": "_Stats", "fields": [scalar_field("amount")] },
            { "name": "BigInt", "fields": null }
        ])));
        let rendered: Vec<String> = model
            .rows()
            .into_iter()
            .map(|row| match row {
                Row::Separator(c) => format!("--{c:?}"),
                Row::Header(t) => format!("#{}", t.display_name),
                Row::Field { owner, field } => format!("{}.{}", owner.name, field.name),
            })
            .collect();
        assert_eq!(
            rendered,
            [
                "--WithIdAndFields",
                "#Transfer",
                "Transfer.amount",
                "Transfer.id",
                "--FieldsNoId",
                "#Stats",
                "_Stats.amount",
                "--Empty",
                "#BigInt",
            ]
        );
    }
}
