use anyhow::{Context, Result};
use relmap_codegen::Options;
use relmap_core::schema::Builder;
use relmap_core::{Config, RowSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub async fn exec(
    rows: impl AsRef<Path>,
    config: impl AsRef<Path>,
    target: impl AsRef<Path>,
    swagger: bool,
) -> Result<()> {
    let written = generate(rows, config, target, swagger).await?;

    for file in &written {
        println!("  {:>10}    {}", "writing", file.display());
    }

    Ok(())
}

/// Resolves the model and writes one file per included table, returning the
/// paths written.
///
/// Nothing is written unless the whole model resolves.
pub async fn generate(
    rows: impl AsRef<Path>,
    config: impl AsRef<Path>,
    target: impl AsRef<Path>,
    swagger: bool,
) -> Result<Vec<PathBuf>> {
    let target = target.as_ref();

    let source = RowSet::from_file(rows.as_ref())?;
    let model = Builder::new().introspect(&source).await?;
    let config = Config::from_file(config.as_ref())?;

    let entities = relmap_core::resolve(&model, &config).context("resolving model")?;
    let output = relmap_codegen::generate(&entities, &Options { swagger });

    // Make sure the target directory exists
    fs::create_dir_all(target).with_context(|| format!("creating {}", target.display()))?;

    let mut written = vec![];
    for entity_output in &output.entities {
        let file = target.join(&entity_output.file_name);
        fs::write(&file, &entity_output.body)
            .with_context(|| format!("writing {}", file.display()))?;
        info!(entity = %entity_output.entity.name, file = %file.display(), "wrote entity");
        written.push(file);
    }

    Ok(written)
}
