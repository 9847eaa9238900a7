//! Writing conversion artifacts to disk

use crate::templates;
use crate::Conversion;
use std::fs;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};
use tracing::debug;
use xrd_openapi_common::{Result, XrdError};

/// File name of the OpenAPI document
pub const OPENAPI_FILE: &str = "openapi.json";

/// File name of the provider configuration
pub const CONFIG_FILE: &str = "generator_config.yml";

/// File name of the summary
pub const README_FILE: &str = "README.md";

/// Writes conversion artifacts to a directory:
/// - openapi.json
/// - generator_config.yml
/// - README.md
pub struct ArtifactWriter {
    tera: Tera,
}

impl ArtifactWriter {
    /// Create a writer with the built-in templates
    pub fn new() -> Result<Self> {
        let tera = templates::load_templates()?;
        Ok(Self { tera })
    }

    /// Write all artifacts, returning the written paths
    pub fn write_to_directory(
        &self,
        conversion: &Conversion,
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(output_dir).map_err(|source| XrdError::Io {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let config_yaml = conversion.config.to_yaml()?;
        let readme = self.render_readme(conversion)?;

        let artifacts: [(&str, &[u8]); 3] = [
            (OPENAPI_FILE, conversion.document_json.as_slice()),
            (CONFIG_FILE, config_yaml.as_bytes()),
            (README_FILE, readme.as_bytes()),
        ];

        let mut written = Vec::with_capacity(artifacts.len());
        for (name, content) in artifacts {
            let path = output_dir.join(name);
            fs::write(&path, content).map_err(|source| XrdError::Io {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), "wrote artifact");
            written.push(path);
        }

        Ok(written)
    }

    /// Render the README summary
    pub fn render_readme(&self, conversion: &Conversion) -> Result<String> {
        let mut context = Context::new();
        context.insert("config", &conversion.config);
        context.insert("sources", &conversion.sources);

        self.tera
            .render("README.md", &context)
            .map_err(|e| XrdError::Render(format!("{:?}", e)))
    }
}
