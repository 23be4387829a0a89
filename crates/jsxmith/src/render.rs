//! Source file to JSX component rendering.

use std::path::Path;

use anyhow::{Context, Result};
use jsxmith_core::{nodes_from_json, Converter};
use jsxmith_html::parse_document;

use crate::config::{ComponentConfig, ConfigFile};
use crate::templates::TemplateEngine;

/// Format of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// HTML markup, converted from the body
    Html,
    /// A serialized node tree
    Json,
}

impl InputFormat {
    /// Detect the format from a file extension. Anything but `.json` is HTML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Html,
        }
    }
}

/// Converts source text to JSX and wraps it into a component.
///
/// Shared by reference across batch worker threads.
pub struct Renderer {
    converter: Converter,
    templates: TemplateEngine,
    component: ComponentConfig,
}

impl Renderer {
    /// Create a renderer from the loaded configuration.
    pub fn new(config: ConfigFile) -> Self {
        Self {
            converter: Converter::with_options(config.convert),
            templates: TemplateEngine::new(),
            component: config.component,
        }
    }

    /// Emit bare JSX regardless of configuration.
    pub fn fragment_only(mut self) -> Self {
        self.component.wrap = false;
        self
    }

    /// Convert source text to JSX markup.
    pub fn to_jsx(&self, source: &str, format: InputFormat) -> Result<String> {
        let jsx = match format {
            InputFormat::Html => {
                let doc = parse_document(source)?;
                self.converter.convert_all(doc.body())
            }
            InputFormat::Json => {
                let nodes = nodes_from_json(source)?;
                self.converter.convert_all(&nodes)
            }
        };

        Ok(jsx.trim().to_string())
    }

    /// Convert source text and render the output file contents.
    pub fn render(&self, source: &str, format: InputFormat, name: &str) -> Result<String> {
        let jsx = self.to_jsx(source, format)?;

        if !self.component.wrap {
            return Ok(format!("{jsx}\n"));
        }

        self.templates
            .render_component(name, &self.component.imports, &jsx)
            .context("Failed to render component template")
    }
}
