//! Almanac - a tips-catalog toolkit.
//!
//! Loading, outline generation, and rendering for curated tips catalogs.
//! A catalog markdown source is parsed into an ordered Section/Entry model,
//! and a navigable, anchor-linked outline is derived from it.

pub mod config;
pub mod outline;

mod error;
mod export;

pub use almanac_core::{anchor, catalog};

pub use error::AlmanacError;

use log::{debug, info};

use catalog::Catalog;
use config::AppConfig;
use outline::Outline;

/// Builder for loading catalogs and rendering their outlines.
///
/// This provides an API for processing catalog markdown through parsing,
/// outline generation, and rendering stages.
///
/// # Examples
///
/// ```rust,no_run
/// use almanac::{CatalogBuilder, config::AppConfig};
///
/// let source = "# Object creation\n\n## Create an empty list of a given length\n";
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = CatalogBuilder::new(config);
///
/// // Parse source into the catalog model
/// let catalog = builder.load(source)
///     .expect("Failed to load");
///
/// // Generate the outline and render it
/// let outline = builder.outline(&catalog)
///     .expect("Failed to generate outline");
/// let markdown = builder.render_markdown(&outline);
///
/// // Or use default config
/// let builder = CatalogBuilder::default();
/// ```
#[derive(Default)]
pub struct CatalogBuilder {
    config: AppConfig,
}

impl CatalogBuilder {
    /// Create a new catalog builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including outline and render settings
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use almanac::{CatalogBuilder, config::AppConfig};
    ///
    /// let config = AppConfig::default();
    /// let builder = CatalogBuilder::new(config);
    /// ```
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse catalog markdown source into a [`Catalog`].
    ///
    /// This performs scanning, assembly, and structural validation to
    /// produce the fully built Section/Entry model.
    ///
    /// # Arguments
    ///
    /// * `source` - Catalog markdown text
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::Parse` when the source violates a structural
    /// expectation of the format; the error carries every diagnostic found
    /// together with the offending source for rich reporting.
    pub fn load(&self, source: &str) -> Result<Catalog, AlmanacError> {
        info!("Loading catalog");

        let catalog = almanac_parser::parse(source)
            .map_err(|err| AlmanacError::new_parse_error(err, source))?;

        debug!(
            sections = catalog.section_count(),
            entries = catalog.entry_count();
            "Catalog loaded"
        );

        Ok(catalog)
    }

    /// Generate the navigable outline for a catalog.
    ///
    /// Walks sections and entries in catalog order and derives an anchor
    /// for every title.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::Outline` when two titles collide on the same
    /// anchor or a title produces an empty anchor.
    pub fn outline(&self, catalog: &Catalog) -> Result<Outline, AlmanacError> {
        info!("Generating outline");

        let outline = outline::generate(catalog, self.config.outline())?;

        debug!(items = outline.len(); "Outline ready");

        Ok(outline)
    }

    /// Render an outline as a Markdown bullet list.
    ///
    /// The marker and indentation come from the builder's
    /// [`RenderConfig`](config::RenderConfig).
    pub fn render_markdown(&self, outline: &Outline) -> String {
        export::markdown::render(outline, self.config.render())
    }

    /// Render an outline as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::Export` if serialization fails.
    pub fn render_json(&self, outline: &Outline) -> Result<String, AlmanacError> {
        let rendered = export::json::render(outline)?;
        Ok(rendered)
    }
}
