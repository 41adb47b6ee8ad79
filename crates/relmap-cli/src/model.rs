use anyhow::{Context, Result};
use relmap_core::schema::Builder;
use relmap_core::RowSet;
use std::path::Path;

pub async fn exec(rows: impl AsRef<Path>) -> Result<()> {
    let rows = rows.as_ref();
    let source = RowSet::from_file(rows)?;
    let model = Builder::new()
        .introspect(&source)
        .await
        .with_context(|| format!("assembling model from {}", rows.display()))?;

    println!("{}", serde_json::to_string_pretty(&model)?);

    Ok(())
}
