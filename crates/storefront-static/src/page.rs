//! Splicing rendered fragments into the catalog page.

/// Placeholder replaced by the card grid.
pub const INJECT_MARKER: &str = "<!-- INJECT_TABLE_HERE -->";

/// End of the reusable site header.
pub const HEADER_END: &str = "</header>";

/// Start of the reusable site footer.
pub const FOOTER_START: &str = "<footer>";

/// Literal markers located in the catalog page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    /// Placeholder for the card grid
    pub inject: String,
    /// Last text of the header segment
    pub header_end: String,
    /// First text of the footer segment
    pub footer_start: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            inject: INJECT_MARKER.to_string(),
            header_end: HEADER_END.to_string(),
            footer_start: FOOTER_START.to_string(),
        }
    }
}

/// Errors that can occur when splicing pages.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Marker not found in catalog page: {marker}")]
    MarkerNotFound { marker: String },
}

/// Replace the first occurrence of `marker` in `page` with `cards`.
///
/// Everything outside the marker is left byte-identical.
pub fn inject_cards(page: &str, marker: &str, cards: &str) -> Result<String, PageError> {
    let Some(start) = page.find(marker) else {
        return Err(PageError::MarkerNotFound {
            marker: marker.to_string(),
        });
    };

    let rest = &page[start + marker.len()..];
    if rest.contains(marker) {
        tracing::warn!(
            "Marker {} appears more than once; only the first is replaced",
            marker
        );
    }

    let mut output = String::with_capacity(page.len() - marker.len() + cards.len());
    output.push_str(&page[..start]);
    output.push_str(cards);
    output.push_str(rest);
    Ok(output)
}

/// Header and footer segments shared by every detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageShell {
    /// Page text up to and including the first header end marker
    pub header: String,
    /// Page text from the first footer start marker to the end
    pub footer: String,
}

impl PageShell {
    /// Split a catalog page into its header and footer segments.
    pub fn split(page: &str, markers: &Markers) -> Result<Self, PageError> {
        let header_end = page
            .find(&markers.header_end)
            .map(|pos| pos + markers.header_end.len())
            .ok_or_else(|| PageError::MarkerNotFound {
                marker: markers.header_end.clone(),
            })?;

        let footer_start = page
            .find(&markers.footer_start)
            .ok_or_else(|| PageError::MarkerNotFound {
                marker: markers.footer_start.clone(),
            })?;

        if footer_start < header_end {
            tracing::warn!(
                "{} appears before {}; detail pages will repeat page content",
                markers.footer_start,
                markers.header_end
            );
        }

        Ok(Self {
            header: page[..header_end].to_string(),
            footer: page[footer_start..].to_string(),
        })
    }

    /// Wrap a content fragment in the header and footer.
    pub fn wrap(&self, fragment: &str) -> String {
        let mut page =
            String::with_capacity(self.header.len() + fragment.len() + self.footer.len());
        page.push_str(&self.header);
        page.push_str(fragment);
        page.push_str(&self.footer);
        page
    }
}
