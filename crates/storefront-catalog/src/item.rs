//! Product records.

use serde::Deserialize;

/// A single product record as it appears in the catalog file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Display name
    pub name: String,

    /// Display price, already formatted by the data source
    pub price: String,

    /// Long-form description shown on the detail page
    pub description: String,

    /// Product image URL or path
    #[serde(rename = "imageLinks")]
    pub image_link: String,

    /// Category token, emitted as a CSS class for client-side filtering
    pub category: String,

    /// Outbound purchase link
    pub link: String,
}

/// An item paired with its 1-based position in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedItem {
    pub index: usize,
    pub item: Item,
}

impl IndexedItem {
    /// File name of this item's detail page, also the target of its catalog card.
    pub fn file_name(&self) -> String {
        format!("{}.html", self.index)
    }
}

/// Pair an item with the index for the given 0-based position.
pub fn with_index(item: Item, position: usize) -> IndexedItem {
    IndexedItem {
        index: position + 1,
        item,
    }
}

/// Index a whole catalog, preserving order.
pub fn index_items(items: Vec<Item>) -> Vec<IndexedItem> {
    items
        .into_iter()
        .enumerate()
        .map(|(position, item)| with_index(item, position))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> Item {
        Item {
            name: name.to_string(),
            price: "$10".to_string(),
            description: "d".to_string(),
            image_link: "a.png".to_string(),
            category: "men".to_string(),
            link: "http://x".to_string(),
        }
    }

    #[test]
    fn indexes_are_one_based() {
        let indexed = with_index(item("Shoe A"), 0);

        assert_eq!(indexed.index, 1);
        assert_eq!(indexed.file_name(), "1.html");
    }

    #[test]
    fn index_items_preserves_order_and_density() {
        let indexed = index_items(vec![item("a"), item("b"), item("c")]);

        let names: Vec<_> = indexed.iter().map(|i| i.item.name.as_str()).collect();
        let indexes: Vec<_> = indexed.iter().map(|i| i.index).collect();

        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(indexes, [1, 2, 3]);
    }

    #[test]
    fn index_items_handles_empty_catalog() {
        assert!(index_items(Vec::new()).is_empty());
    }
}
