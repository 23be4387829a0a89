//! Directory conversion command.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::config::ConfigFile;
use crate::naming::component_name_for;
use crate::render::{InputFormat, Renderer};

/// Result of a batch conversion.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files written
    pub converted: usize,
    /// Files that failed to convert
    pub failed: usize,
}

/// Run the batch command.
pub async fn run(dir: PathBuf, output: PathBuf, config: ConfigFile) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("Directory not found: {}", dir.display());
    }

    tracing::info!("Converting HTML files under {}...", dir.display());
    let start = Instant::now();

    let renderer = Renderer::new(config);
    let summary =
        tokio::task::spawn_blocking(move || convert_dir(&dir, &output, &renderer)).await??;

    tracing::info!(
        "Converted {} files ({} failed) in {}ms",
        summary.converted,
        summary.failed,
        start.elapsed().as_millis()
    );

    if summary.failed > 0 && summary.converted == 0 {
        anyhow::bail!("No files converted");
    }

    Ok(())
}

/// Convert every `.html`/`.htm` file under `dir` into a `.tsx` file under `output`.
///
/// Files are converted in parallel. A failing file is logged and counted; it does not
/// stop the others.
pub fn convert_dir(dir: &Path, output: &Path, renderer: &Renderer) -> Result<BatchSummary> {
    let files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| is_html(path))
        .collect();

    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;

    let results: Vec<Result<PathBuf>> = files
        .par_iter()
        .map(|path| convert_file(dir, path, output, renderer))
        .collect();

    let mut summary = BatchSummary::default();
    for (path, result) in files.iter().zip(results) {
        match result {
            Ok(written) => {
                tracing::debug!("{} -> {}", path.display(), written.display());
                summary.converted += 1;
            }
            Err(e) => {
                tracing::warn!("Skipping {}: {:#}", path.display(), e);
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

fn convert_file(root: &Path, path: &Path, output: &Path, renderer: &Renderer) -> Result<PathBuf> {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let target = output.join(relative).with_extension("tsx");

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let rendered = renderer.render(&source, InputFormat::Html, &component_name_for(path))?;

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&target, rendered)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    Ok(target)
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn converts_nested_html_files() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("site");
        let out = temp.path().join("out");
        fs::create_dir_all(src.join("blog")).unwrap();

        fs::write(src.join("index.html"), "<h1 class=\"title\">Home</h1>").unwrap();
        fs::write(src.join("blog/first-post.htm"), "<p>{post}</p>").unwrap();
        fs::write(src.join("notes.txt"), "not html").unwrap();

        let renderer = Renderer::new(ConfigFile::default());
        let summary = convert_dir(&src, &out, &renderer).unwrap();

        assert_eq!(summary, BatchSummary { converted: 2, failed: 0 });

        let index = fs::read_to_string(out.join("index.tsx")).unwrap();
        assert!(index.contains("export default function Index()"));
        assert!(index.contains(r#"<h1 className="title">Home</h1>"#));

        let post = fs::read_to_string(out.join("blog/first-post.tsx")).unwrap();
        assert!(post.contains("export default function FirstPost()"));
        assert!(post.contains("<p>&#123;post&#125;</p>"));

        assert!(!out.join("notes.tsx").exists());
    }

    #[test]
    fn counts_failed_files() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("site");
        let out = temp.path().join("out");
        fs::create_dir_all(&src).unwrap();

        fs::write(src.join("ok.html"), "<br>").unwrap();
        // Invalid UTF-8 cannot be read as a string
        fs::write(src.join("bad.html"), [0xff, 0xfe, 0xfd]).unwrap();

        let renderer = Renderer::new(ConfigFile::default());
        let summary = convert_dir(&src, &out, &renderer).unwrap();

        assert_eq!(summary, BatchSummary { converted: 1, failed: 1 });
    }

    #[test]
    fn converts_deeply_nested_file_alongside_others() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("site");
        let out = temp.path().join("out");
        fs::create_dir_all(&src).unwrap();

        fs::write(src.join("deep.html"), "<div>".repeat(10_000)).unwrap();
        fs::write(src.join("flat.html"), "<hr>").unwrap();

        let renderer = Renderer::new(ConfigFile::default()).fragment_only();
        let summary = convert_dir(&src, &out, &renderer).unwrap();

        assert_eq!(summary, BatchSummary { converted: 2, failed: 0 });
        let deep = fs::read_to_string(out.join("deep.tsx")).unwrap();
        assert_eq!(deep.trim_end().len(), 10_000 * "<div></div>".len());
        assert_eq!(fs::read_to_string(out.join("flat.tsx")).unwrap(), "<hr />\n");
    }

    #[tokio::test]
    async fn run_rejects_missing_directory() {
        let temp = tempdir().unwrap();

        let result = run(
            temp.path().join("missing"),
            temp.path().join("out"),
            ConfigFile::default(),
        )
        .await;

        assert!(result.is_err());
    }
}
