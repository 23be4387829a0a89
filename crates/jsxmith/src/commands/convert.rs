//! Single file conversion command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::ConfigFile;
use crate::naming::{component_name_for, to_component_name};
use crate::render::{InputFormat, Renderer};

/// Run the convert command.
pub async fn run(
    input: PathBuf,
    output: Option<PathBuf>,
    name: Option<String>,
    fragment: bool,
    config: ConfigFile,
) -> Result<()> {
    let source = tokio::fs::read_to_string(&input)
        .await
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let format = InputFormat::from_path(&input);
    let name = match name {
        Some(name) => to_component_name(&name),
        None => component_name_for(&input),
    };

    let mut renderer = Renderer::new(config);
    if fragment {
        renderer = renderer.fragment_only();
    }

    tracing::debug!("Converting {} as {:?}", input.display(), format);
    let rendered = renderer
        .render(&source, format, &name)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            tokio::fs::write(&path, rendered)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {} ({})", path.display(), name);
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
