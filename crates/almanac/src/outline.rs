//! Outline generation: the navigable table of contents for a catalog.
//!
//! [`generate`] walks a catalog's sections in order, then each section's
//! entries in order, and derives an anchor for every title. The result is a
//! flat, ordered sequence of [`OutlineItem`]s suitable for embedding as
//! navigation links in a rendered document.
//!
//! Anchor collisions are fatal: two titles that slug to the same anchor
//! would produce ambiguous links, so generation stops with an error naming
//! both titles. There are no partial results.

use std::fmt;

use indexmap::IndexMap;
use log::debug;
use serde::Serialize;
use thiserror::Error;

use almanac_core::{
    anchor::{Anchor, slugify},
    catalog::Catalog,
};

use crate::config::OutlineConfig;

/// Nesting depth of an outline item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// A section heading.
    Section,
    /// An entry within a section.
    Entry,
}

impl Depth {
    /// Returns the numeric level: 1 for sections, 2 for entries.
    pub fn level(&self) -> u8 {
        match self {
            Depth::Section => 1,
            Depth::Entry => 2,
        }
    }
}

impl Serialize for Depth {
    /// Serializes the depth as its numeric level.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.level())
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

/// One navigation link in the outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineItem {
    title: String,
    anchor: Anchor,
    depth: Depth,
}

impl OutlineItem {
    fn new(title: impl Into<String>, anchor: Anchor, depth: Depth) -> Self {
        Self {
            title: title.into(),
            anchor,
            depth,
        }
    }

    /// Returns the display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the derived anchor.
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Returns the nesting depth.
    pub fn depth(&self) -> Depth {
        self.depth
    }
}

/// An ordered outline mirroring catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Outline {
    items: Vec<OutlineItem>,
}

impl Outline {
    /// Returns the items in catalog order.
    pub fn items(&self) -> &[OutlineItem] {
        &self.items
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the outline has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Outline {
    type Item = &'a OutlineItem;
    type IntoIter = std::slice::Iter<'a, OutlineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Errors from outline generation.
///
/// Both variants are build-time validation failures surfaced to the author;
/// there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutlineError {
    /// Two titles slug to the same anchor.
    #[error(
        "duplicate anchor `{anchor}`: `{first}` and `{second}` produce the same link target"
    )]
    DuplicateAnchor {
        anchor: String,
        first: String,
        second: String,
    },

    /// A title contains no characters that survive slugging.
    #[error("title `{title}` produces an empty anchor")]
    EmptyAnchor { title: String },
}

/// Generate the outline for a catalog.
///
/// Walks sections in order, then each section's entries in order. Sections
/// get depth 1, entries depth 2. With [`OutlineConfig::entries`] disabled,
/// only sections appear.
///
/// # Errors
///
/// Returns [`OutlineError::DuplicateAnchor`] when two titles collide after
/// slugging (naming both), or [`OutlineError::EmptyAnchor`] when a title
/// slugs to nothing. No partial outline is returned.
pub fn generate(catalog: &Catalog, config: &OutlineConfig) -> Result<Outline, OutlineError> {
    // Anchor -> title of its first occurrence, in insertion order.
    let mut seen: IndexMap<Anchor, String> = IndexMap::new();
    let mut items = Vec::new();

    for section in catalog.sections() {
        push_item(section.title(), Depth::Section, &mut seen, &mut items)?;

        if config.entries() {
            for entry in section.entries() {
                push_item(entry.title(), Depth::Entry, &mut seen, &mut items)?;
            }
        }
    }

    debug!(items = items.len(); "Outline generated");

    Ok(Outline { items })
}

fn push_item(
    title: &str,
    depth: Depth,
    seen: &mut IndexMap<Anchor, String>,
    items: &mut Vec<OutlineItem>,
) -> Result<(), OutlineError> {
    let slug = slugify(title);
    if slug.is_empty() {
        return Err(OutlineError::EmptyAnchor {
            title: title.to_string(),
        });
    }

    let anchor = Anchor::new(&slug);
    if let Some(first) = seen.get(&anchor) {
        return Err(OutlineError::DuplicateAnchor {
            anchor: slug,
            first: first.clone(),
            second: title.to_string(),
        });
    }

    seen.insert(anchor, title.to_string());
    items.push(OutlineItem::new(title, anchor, depth));
    Ok(())
}
