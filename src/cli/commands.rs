//! The `--update` and `--install` actions.

use super::Settings;
use crate::extract::extract_imports;
use crate::install::{install_all, CommandFetcher};
use crate::manifest::{read_manifest, write_manifest};
use anyhow::Result;

/// Scan the source directory and rewrite the manifest.
pub fn update(settings: &Settings) -> Result<usize> {
    tracing::info!(
        "Updating libraries in '{}' from '{}'",
        settings.manifest_path.display(),
        settings.source_dir.display()
    );

    let imports = extract_imports(&settings.source_dir, &settings.config.source_extensions)?;
    write_manifest(&settings.manifest_path, &imports)?;

    tracing::info!("Wrote {} libraries", imports.len());
    Ok(imports.len())
}

/// Fetch every dependency listed in the manifest.
pub fn install(settings: &Settings) -> Result<usize> {
    tracing::info!("Installing libraries from: '{}'", settings.manifest_path.display());

    let entries = read_manifest(&settings.manifest_path)?;
    let mut fetcher = CommandFetcher::from_command(&settings.config.fetch_command)?;
    let fetched = install_all(&entries, &mut fetcher)?;

    tracing::debug!("Fetched {} libraries", fetched);
    Ok(fetched)
}
