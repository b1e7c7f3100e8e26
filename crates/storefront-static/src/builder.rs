//! Storefront site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use storefront_catalog::{index_items, load_catalog, CatalogError};

use crate::page::{inject_cards, Markers, PageError, PageShell};
use crate::templates::{TemplateEngine, TemplateSources};

/// Configuration for building the storefront.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Product catalog (JSON array of items)
    pub data_path: PathBuf,

    /// Catalog page, rewritten in place with the card grid
    pub page_path: PathBuf,

    /// Directory receiving one detail page per item
    pub output_dir: PathBuf,

    /// Markers located in the catalog page
    pub markers: Markers,

    /// Card template override
    pub card_template: Option<PathBuf>,

    /// Detail template override
    pub detail_template: Option<PathBuf>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data.json"),
            page_path: PathBuf::from("dist/index.html"),
            output_dir: PathBuf::from("dist"),
            markers: Markers::default(),
            card_template: None,
            detail_template: None,
        }
    }
}

/// A detail page that could not be written.
#[derive(Debug)]
pub struct PageFailure {
    /// Index of the item
    pub index: usize,

    /// Path that failed
    pub path: PathBuf,

    /// Error message
    pub message: String,
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of items in the catalog
    pub items: usize,

    /// Number of detail pages written
    pub pages_written: usize,

    /// Detail pages that failed to write
    pub failures: Vec<PageFailure>,

    /// Rewritten catalog page
    pub catalog_path: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Total build time in milliseconds
    pub duration_ms: u64,
}

impl BuildResult {
    /// Whether every detail page was written.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Failed to read {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error(transparent)]
    Page(#[from] PageError),

    #[error("Failed to write {path}: {message}")]
    WriteError { path: String, message: String },
}

impl BuildError {
    fn read(path: &Path, err: impl ToString) -> Self {
        Self::ReadError {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    fn write(path: &Path, err: impl ToString) -> Self {
        Self::WriteError {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

/// A detail page rendered and waiting to be written.
struct DetailPage {
    index: usize,
    file_name: String,
    html: String,
}

/// Storefront builder.
pub struct SiteBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl SiteBuilder {
    /// Create a new builder, compiling the configured templates.
    pub fn new(config: BuildConfig) -> Result<Self, BuildError> {
        let sources = Self::load_templates(&config)?;
        let templates = TemplateEngine::from_sources(sources)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        Ok(Self { config, templates })
    }

    /// Read template overrides, falling back to the built-in templates.
    fn load_templates(config: &BuildConfig) -> Result<TemplateSources, BuildError> {
        let mut sources = TemplateSources::default();

        if let Some(path) = &config.card_template {
            sources.card = fs::read_to_string(path).map_err(|e| BuildError::read(path, e))?;
            tracing::debug!("Using card template {}", path.display());
        }
        if let Some(path) = &config.detail_template {
            sources.detail = fs::read_to_string(path).map_err(|e| BuildError::read(path, e))?;
            tracing::debug!("Using detail template {}", path.display());
        }

        Ok(sources)
    }

    /// Build the catalog page and every detail page.
    ///
    /// All fatal checks run before anything on disk is touched. Once the
    /// catalog page is written, a failed detail page is recorded in the
    /// result and the remaining pages are still written.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let items = index_items(load_catalog(&self.config.data_path)?);
        tracing::debug!(
            "Loaded {} items from {}",
            items.len(),
            self.config.data_path.display()
        );

        let cards = self
            .templates
            .render_cards(&items)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        let page_path = &self.config.page_path;
        let page = fs::read_to_string(page_path).map_err(|e| BuildError::read(page_path, e))?;

        let catalog = inject_cards(&page, &self.config.markers.inject, &cards)?;

        // Detail pages share the rewritten catalog's header and footer.
        let shell = PageShell::split(&catalog, &self.config.markers)?;

        let details = items
            .iter()
            .map(|entry| {
                let fragment = self
                    .templates
                    .render_detail(entry)
                    .map_err(|e| BuildError::TemplateError(e.to_string()))?;
                Ok(DetailPage {
                    index: entry.index,
                    file_name: entry.file_name(),
                    html: shell.wrap(&fragment),
                })
            })
            .collect::<Result<Vec<_>, BuildError>>()?;

        fs::write(page_path, &catalog).map_err(|e| BuildError::write(page_path, e))?;
        tracing::info!("Items successfully injected into {}", display_name(page_path));

        let failures = self.write_details(details);

        let duration = start.elapsed();

        Ok(BuildResult {
            items: items.len(),
            pages_written: items.len() - failures.len(),
            failures,
            catalog_path: page_path.clone(),
            output_dir: self.config.output_dir.clone(),
            duration_ms: duration.as_millis() as u64,
        })
    }

    /// Write each detail page, collecting failures instead of stopping.
    fn write_details(&self, details: Vec<DetailPage>) -> Vec<PageFailure> {
        let mut failures = Vec::new();

        if let Err(e) = fs::create_dir_all(&self.config.output_dir) {
            tracing::error!(
                "Error creating {}: {}",
                self.config.output_dir.display(),
                e
            );
        }

        for page in details {
            let path = self.config.output_dir.join(&page.file_name);
            match fs::write(&path, page.html) {
                Ok(()) => tracing::info!("{} successfully created", page.file_name),
                Err(e) => {
                    tracing::error!("Error creating {}: {}", page.file_name, e);
                    failures.push(PageFailure {
                        index: page.index,
                        path,
                        message: e.to_string(),
                    });
                }
            }
        }

        failures
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
