//! `subplay introspect`: print the introspection query.

use anyhow::Result;

use crate::schema::INTROSPECTION_QUERY;

pub fn run() -> Result<()> {
    println!("{INTROSPECTION_QUERY}");
    Ok(())
}
