//! Scaffold a sample storefront.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command in the current directory.
pub fn run(yes: bool) -> Result<()> {
    scaffold(Path::new("."), yes)
}

/// Write the sample config, catalog and catalog page under `root`.
fn scaffold(root: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing storefront...");

    let dist_dir = root.join("dist");
    fs::create_dir_all(&dist_dir).context("Failed to create dist directory")?;

    write_if_allowed(&root.join("storefront.toml"), DEFAULT_CONFIG, yes)?;
    write_if_allowed(&root.join("data.json"), DEFAULT_DATA, yes)?;
    write_if_allowed(&dist_dir.join("index.html"), DEFAULT_PAGE, yes)?;

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'storefront build' to generate the catalog.");

    Ok(())
}

fn write_if_allowed(path: &Path, content: &str, yes: bool) -> Result<()> {
    if path.exists() && !yes {
        tracing::warn!("{} already exists. Use --yes to overwrite.", path.display());
        return Ok(());
    }

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Created {}", path.display());
    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Storefront Configuration

[catalog]
# Product catalog
data = "data.json"

# Catalog page, rewritten in place with the product grid
page = "dist/index.html"

# Directory for the per-product pages
output = "dist"

[templates]
# Optional template overrides
# card = "templates/card.html"
# detail = "templates/detail.html"
"#;

const DEFAULT_DATA: &str = r#"[
  {
    "name": "Canvas Sneaker",
    "price": "$49.00",
    "description": "Lightweight canvas sneaker with a rubber sole.",
    "imageLinks": "images/sneaker.png",
    "category": "men",
    "link": "https://example.com/products/canvas-sneaker"
  },
  {
    "name": "Trail Runner",
    "price": "$89.00",
    "description": "Grippy trail shoe for wet and rocky paths.",
    "imageLinks": "images/trail.png",
    "category": "women",
    "link": "https://example.com/products/trail-runner"
  }
]
"#;

const DEFAULT_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Storefront</title>
</head>
<body>
  <header>
    <nav><a href="index.html">Storefront</a></nav>
  </header>
  <section class="container mx-auto flex flex-wrap">
    <!-- INJECT_TABLE_HERE -->
  </section>
  <footer>
    <p>&copy; Storefront</p>
  </footer>
</body>
</html>
"#;
