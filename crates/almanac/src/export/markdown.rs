//! Markdown rendering of an outline.
//!
//! Produces a nested bullet list where each item is a `[title](#anchor)`
//! link, indented by depth. The marker and indent width come from
//! [`RenderConfig`].

use crate::{config::RenderConfig, outline::Outline};

/// Render an outline as a Markdown bullet list.
///
/// Sections sit at the left margin; entries are indented one level. The
/// output ends with a trailing newline so it can be written to a file or
/// spliced into a larger document as-is.
pub(crate) fn render(outline: &Outline, config: &RenderConfig) -> String {
    let mut out = String::new();

    for item in outline {
        let level = usize::from(item.depth().level());
        let indent = config.indent() * (level - 1);
        out.push_str(&" ".repeat(indent));
        out.push_str(config.bullet());
        out.push(' ');
        out.push('[');
        out.push_str(item.title());
        out.push_str("](#");
        out.push_str(&item.anchor().to_string());
        out.push_str(")\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use almanac_core::catalog::{Catalog, Entry, Section};

    use crate::{
        config::OutlineConfig,
        outline::generate,
    };

    use super::*;

    fn outline() -> Outline {
        let mut section = Section::new("Object creation");
        section.push_entry(Entry::new("Create an empty list of a given length"));

        let mut catalog = Catalog::new();
        catalog.push_section(section);

        generate(&catalog, &OutlineConfig::default()).expect("Failed to generate")
    }

    #[test]
    fn test_render_nested_list() {
        let rendered = render(&outline(), &RenderConfig::default());
        assert_eq!(
            rendered,
            "- [Object creation](#object-creation)\n  \
             - [Create an empty list of a given length](#create-an-empty-list-of-a-given-length)\n"
        );
    }

    #[test]
    fn test_render_respects_config() {
        let config = RenderConfig::new("*", 4);
        let rendered = render(&outline(), &config);
        assert!(rendered.starts_with("* [Object creation]"));
        assert!(rendered.contains("\n    * [Create an empty list"));
    }

    #[test]
    fn test_render_empty_outline() {
        let rendered = render(&Outline::default(), &RenderConfig::default());
        assert!(rendered.is_empty());
    }
}
