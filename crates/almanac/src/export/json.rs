//! JSON rendering of an outline.
//!
//! Serializes the outline as a pretty-printed JSON array of
//! `{title, anchor, depth}` objects, with anchors as strings and depths as
//! numeric levels.

use crate::{export::Error, outline::Outline};

/// Render an outline as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`Error::Json`] if serialization fails.
pub(crate) fn render(outline: &Outline) -> Result<String, Error> {
    let mut out = serde_json::to_string_pretty(outline)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use almanac_core::catalog::{Catalog, Entry, Section};

    use crate::{config::OutlineConfig, outline::generate};

    use super::*;

    #[test]
    fn test_render_json_shape() {
        let mut section = Section::new("Object creation");
        section.push_entry(Entry::new("Create an empty list of a given length"));

        let mut catalog = Catalog::new();
        catalog.push_section(section);

        let outline = generate(&catalog, &OutlineConfig::default()).expect("Failed to generate");
        let rendered = render(&outline).expect("Failed to render");

        let parsed: serde_json::Value =
            serde_json::from_str(&rendered).expect("Rendered JSON should parse");
        let items = parsed.as_array().expect("Expected a JSON array");

        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["title"], "Object creation");
        assert_eq!(items[0]["anchor"], "object-creation");
        assert_eq!(items[0]["depth"], 1);
        assert_eq!(items[1]["anchor"], "create-an-empty-list-of-a-given-length");
        assert_eq!(items[1]["depth"], 2);
    }

    #[test]
    fn test_render_json_empty_outline() {
        let rendered = render(&Outline::default()).expect("Failed to render");
        assert_eq!(rendered, "[]\n");
    }
}
