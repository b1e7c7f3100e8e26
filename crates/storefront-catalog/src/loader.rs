//! Catalog file decoding.

use std::fs;
use std::path::{Path, PathBuf};

use crate::item::Item;

/// Errors that can occur when loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and decode the catalog file at `path`.
///
/// Items are returned in file order, not yet indexed.
pub fn load_catalog(path: &Path) -> Result<Vec<Item>, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_catalog(&content).map_err(|source| CatalogError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode a catalog held in memory.
pub fn parse_catalog(source: &str) -> Result<Vec<Item>, serde_json::Error> {
    serde_json::from_str(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    const SHOE: &str = r#"[{"name":"Shoe A","price":"$10","description":"d","imageLinks":"a.png","category":"men","link":"http://x"}]"#;

    #[test]
    fn loads_items_in_order() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("data.json");
        fs::write(
            &path,
            r#"[
  {"name":"First","price":"$1","description":"one","imageLinks":"1.png","category":"men","link":"http://a"},
  {"name":"Second","price":"$2","description":"two","imageLinks":"2.png","category":"women","link":"http://b"}
]"#,
        )
        .unwrap();

        let items = load_catalog(&path).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "First");
        assert_eq!(items[1].name, "Second");
        assert_eq!(items[1].image_link, "2.png");
    }

    #[test]
    fn decodes_image_links_key() {
        let items = parse_catalog(SHOE).unwrap();

        assert_eq!(
            items,
            vec![Item {
                name: "Shoe A".to_string(),
                price: "$10".to_string(),
                description: "d".to_string(),
                image_link: "a.png".to_string(),
                category: "men".to_string(),
                link: "http://x".to_string(),
            }]
        );
    }

    #[test]
    fn ignores_unknown_fields() {
        let source = r#"[{"name":"n","price":"p","description":"d","imageLinks":"i","category":"c","link":"l","sku":42}]"#;

        assert_eq!(parse_catalog(source).unwrap().len(), 1);
    }

    #[test]
    fn errors_on_missing_file() {
        let temp = tempdir().unwrap();

        let result = load_catalog(&temp.path().join("data.json"));

        assert!(matches!(result, Err(CatalogError::Read { .. })));
    }

    #[test]
    fn errors_on_malformed_json() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("data.json");
        fs::write(&path, "[{\"name\": ").unwrap();

        let result = load_catalog(&path);

        assert!(matches!(result, Err(CatalogError::Decode { .. })));
    }

    #[test]
    fn errors_on_wrong_field_type() {
        let source = r#"[{"name":"n","price":10,"description":"d","imageLinks":"i","category":"c","link":"l"}]"#;

        assert!(parse_catalog(source).is_err());
    }

    #[test]
    fn errors_on_non_array_document() {
        assert!(parse_catalog(r#"{"name":"n"}"#).is_err());
    }
}
