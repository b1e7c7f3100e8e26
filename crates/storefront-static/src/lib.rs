//! Static page generation for the storefront.
//!
//! Injects a grid of product cards into the catalog page and wraps a detail
//! fragment for every product in the catalog page's header and footer.

pub mod builder;
pub mod page;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, PageFailure, SiteBuilder};
pub use page::{Markers, PageError, PageShell};
pub use templates::{TemplateEngine, TemplateSources};
