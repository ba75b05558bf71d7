//! Configuration types for Almanac outline generation and rendering.
//!
//! This module provides configuration structures that control which items
//! appear in a generated outline and how the outline is rendered. All types
//! implement [`serde::Deserialize`] for flexible loading from external
//! sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining outline and render settings.
//! - [`OutlineConfig`] - Controls which catalog levels appear in the outline.
//! - [`RenderConfig`] - Controls the Markdown rendering of the outline.
//!
//! # Example
//!
//! ```
//! # use almanac::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.outline().entries());
//! ```

use serde::Deserialize;

/// Top-level application configuration combining outline and render settings.
///
/// Groups [`OutlineConfig`] and [`RenderConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Outline configuration section.
    #[serde(default)]
    outline: OutlineConfig,

    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified outline and render configurations.
    ///
    /// # Arguments
    ///
    /// * `outline` - Outline generation settings.
    /// * `render` - Markdown rendering settings.
    pub fn new(outline: OutlineConfig, render: RenderConfig) -> Self {
        Self { outline, render }
    }

    /// Returns the outline configuration.
    pub fn outline(&self) -> &OutlineConfig {
        &self.outline
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }
}

/// Outline generation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OutlineConfig {
    /// Whether entries appear in the outline, or sections only.
    #[serde(default = "default_entries")]
    entries: bool,
}

impl OutlineConfig {
    /// Creates a new [`OutlineConfig`].
    ///
    /// # Arguments
    ///
    /// * `entries` - Whether entry-level items are included.
    pub fn new(entries: bool) -> Self {
        Self { entries }
    }

    /// Returns whether entry-level items are included.
    pub fn entries(&self) -> bool {
        self.entries
    }
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            entries: default_entries(),
        }
    }
}

fn default_entries() -> bool {
    true
}

/// Markdown rendering configuration for generated outlines.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// List marker placed before each item.
    #[serde(default = "default_bullet")]
    bullet: String,

    /// Spaces of indentation per nesting level.
    #[serde(default = "default_indent")]
    indent: usize,
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`].
    ///
    /// # Arguments
    ///
    /// * `bullet` - List marker placed before each item (e.g. `-` or `*`).
    /// * `indent` - Spaces of indentation per nesting level.
    pub fn new(bullet: impl Into<String>, indent: usize) -> Self {
        Self {
            bullet: bullet.into(),
            indent,
        }
    }

    /// Returns the list marker.
    pub fn bullet(&self) -> &str {
        &self.bullet
    }

    /// Returns the indentation width per nesting level.
    pub fn indent(&self) -> usize {
        self.indent
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            bullet: default_bullet(),
            indent: default_indent(),
        }
    }
}

fn default_bullet() -> String {
    "-".to_string()
}

fn default_indent() -> usize {
    2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.outline().entries());
        assert_eq!(config.render().bullet(), "-");
        assert_eq!(config.render().indent(), 2);
    }

    #[test]
    fn test_sections_only() {
        let config = OutlineConfig::new(false);
        assert!(!config.entries());
    }
}
