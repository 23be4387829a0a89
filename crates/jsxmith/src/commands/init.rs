//! Write a default configuration file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# jsxmith configuration

[convert]
# HTML comments: "keep" renders {/* ... */}, "drop" omits them
comments = "keep"

# Inline <script>/<style>: "convert" like any element, "comment" to keep the source as a comment
raw_text = "convert"

[component]
# Lines emitted above the generated component
imports = []

# Wrap output in `export default function Name()`; false emits bare JSX
wrap = true
"#;
