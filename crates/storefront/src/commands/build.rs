//! Storefront build command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;
use storefront_static::{BuildConfig, Markers, SiteBuilder};

/// Configuration file structure (storefront.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    catalog: CatalogConfig,
    #[serde(default)]
    templates: TemplatesConfig,
    #[serde(default)]
    markers: MarkersConfig,
}

#[derive(Debug, Deserialize)]
struct CatalogConfig {
    #[serde(default = "default_data")]
    data: String,
    #[serde(default = "default_page")]
    page: String,
    #[serde(default = "default_output")]
    output: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data: default_data(),
            page: default_page(),
            output: default_output(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct TemplatesConfig {
    card: Option<String>,
    detail: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct MarkersConfig {
    inject: Option<String>,
    header_end: Option<String>,
    footer_start: Option<String>,
}

fn default_data() -> String {
    "data.json".to_string()
}
fn default_page() -> String {
    "dist/index.html".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub data: Option<PathBuf>,
    pub page: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

fn build_config(file_config: ConfigFile, overrides: Overrides) -> Result<BuildConfig> {
    let defaults = Markers::default();
    let markers = Markers {
        inject: file_config.markers.inject.unwrap_or(defaults.inject),
        header_end: file_config.markers.header_end.unwrap_or(defaults.header_end),
        footer_start: file_config
            .markers
            .footer_start
            .unwrap_or(defaults.footer_start),
    };

    for (key, marker) in [
        ("inject", &markers.inject),
        ("header_end", &markers.header_end),
        ("footer_start", &markers.footer_start),
    ] {
        if marker.is_empty() {
            anyhow::bail!("[markers] {} must not be empty", key);
        }
    }

    Ok(BuildConfig {
        data_path: overrides
            .data
            .unwrap_or_else(|| PathBuf::from(&file_config.catalog.data)),
        page_path: overrides
            .page
            .unwrap_or_else(|| PathBuf::from(&file_config.catalog.page)),
        output_dir: overrides
            .output
            .unwrap_or_else(|| PathBuf::from(&file_config.catalog.output)),
        markers,
        card_template: file_config.templates.card.map(PathBuf::from),
        detail_template: file_config.templates.detail.map(PathBuf::from),
    })
}

/// Run the build command.
pub fn run(config_path: &Path, overrides: Overrides) -> Result<()> {
    let file_config = load_config(config_path)?;
    let config = build_config(file_config, overrides)?;

    let result = SiteBuilder::new(config)?.build()?;

    tracing::debug!(
        "Built {} of {} detail pages in {}ms",
        result.pages_written,
        result.items,
        result.duration_ms
    );

    if !result.is_complete() {
        anyhow::bail!(
            "{} of {} detail pages could not be written to {}",
            result.failures.len(),
            result.items,
            result.output_dir.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_config_uses_defaults() {
        let temp = tempdir().unwrap();

        let config = build_config(
            load_config(&temp.path().join("storefront.toml")).unwrap(),
            Overrides::default(),
        )
        .unwrap();

        assert_eq!(config.data_path, PathBuf::from("data.json"));
        assert_eq!(config.page_path, PathBuf::from("dist/index.html"));
        assert_eq!(config.output_dir, PathBuf::from("dist"));
        assert_eq!(config.markers, Markers::default());
        assert!(config.card_template.is_none());
    }

    #[test]
    fn reads_config_sections() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("storefront.toml");
        fs::write(
            &path,
            r#"
[catalog]
data = "products.json"
output = "public"

[templates]
detail = "templates/detail.html"

[markers]
footer_start = "<footer class=\"site\">"
"#,
        )
        .unwrap();

        let config = build_config(load_config(&path).unwrap(), Overrides::default()).unwrap();

        assert_eq!(config.data_path, PathBuf::from("products.json"));
        assert_eq!(config.page_path, PathBuf::from("dist/index.html"));
        assert_eq!(config.output_dir, PathBuf::from("public"));
        assert_eq!(
            config.detail_template,
            Some(PathBuf::from("templates/detail.html"))
        );
        assert_eq!(config.markers.footer_start, r#"<footer class="site">"#);
        assert_eq!(config.markers.header_end, "</header>");
    }

    #[test]
    fn flags_override_config_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("storefront.toml");
        fs::write(&path, "[catalog]\ndata = \"products.json\"\n").unwrap();

        let config = build_config(
            load_config(&path).unwrap(),
            Overrides {
                data: Some(PathBuf::from("other.json")),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(config.data_path, PathBuf::from("other.json"));
    }

    #[test]
    fn empty_marker_is_rejected() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("storefront.toml");
        fs::write(&path, "[markers]\ninject = \"\"\n").unwrap();

        let err =
            build_config(load_config(&path).unwrap(), Overrides::default()).unwrap_err();

        assert!(err.to_string().contains("inject"));
    }

    #[test]
    fn malformed_config_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("storefront.toml");
        fs::write(&path, "[catalog\n").unwrap();

        assert!(load_config(&path).is_err());
    }

    #[test]
    fn run_fails_on_missing_catalog() {
        let temp = tempdir().unwrap();
        let page = temp.path().join("index.html");
        fs::write(
            &page,
            "<header></header><!-- INJECT_TABLE_HERE --><footer></footer>",
        )
        .unwrap();

        let result = run(
            &temp.path().join("storefront.toml"),
            Overrides {
                data: Some(temp.path().join("data.json")),
                page: Some(page.clone()),
                output: Some(temp.path().to_path_buf()),
            },
        );

        assert!(result.is_err());
        assert!(fs::read_to_string(&page).unwrap().contains("INJECT_TABLE_HERE"));
    }
}
