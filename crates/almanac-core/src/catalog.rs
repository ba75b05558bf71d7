//! The Section/Entry content model for a tips catalog.
//!
//! A [`Catalog`] is the root aggregate: an ordered sequence of [`Section`]s,
//! each holding an ordered sequence of [`Entry`]s. The model is assembled
//! once by the parser and read many times afterwards; nothing here mutates
//! after load.
//!
//! Order is significant everywhere: sections, entries, code samples, and
//! example outputs all keep their source order, and outline generation
//! relies on it.

use log::debug;

/// One code sample attached to an entry.
///
/// The sample body is opaque text; it is never executed or type-checked.
/// The language tag, when present, comes from the fence info string and is
/// kept for renderers that want syntax highlighting hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSample {
    language: Option<String>,
    text: String,
}

impl CodeSample {
    /// Creates a new code sample.
    ///
    /// # Arguments
    ///
    /// * `language` - Optional language tag (e.g. `"r"`)
    /// * `text` - The sample body, verbatim
    pub fn new(language: Option<String>, text: impl Into<String>) -> Self {
        Self {
            language,
            text: text.into(),
        }
    }

    /// Returns the language tag, if the sample carried one.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Returns the sample body.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A single documented tip.
///
/// An entry owns a title, explanatory text (possibly multiple paragraphs,
/// joined with blank lines), and the ordered code samples and example
/// outputs that accompany it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    title: String,
    text: String,
    samples: Vec<CodeSample>,
    outputs: Vec<String>,
}

impl Entry {
    /// Creates an empty entry with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: String::new(),
            samples: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Appends a paragraph to the explanatory text.
    ///
    /// Paragraphs are separated by a blank line in the accumulated text.
    pub fn push_paragraph(&mut self, paragraph: &str) {
        if !self.text.is_empty() {
            self.text.push_str("\n\n");
        }
        self.text.push_str(paragraph);
    }

    /// Appends a code sample.
    pub fn push_sample(&mut self, sample: CodeSample) {
        self.samples.push(sample);
    }

    /// Appends an example output transcript.
    pub fn push_output(&mut self, output: impl Into<String>) {
        self.outputs.push(output.into());
    }

    /// Returns the entry title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the explanatory text. Empty if the entry has none.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the code samples in source order.
    pub fn samples(&self) -> &[CodeSample] {
        &self.samples
    }

    /// Returns the example outputs in source order.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }
}

/// A named grouping of entries.
///
/// A section's ordinal position is its index within the catalog. The
/// optional intro text holds prose that appeared between the section
/// heading and its first entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    title: String,
    intro: Option<String>,
    entries: Vec<Entry>,
}

impl Section {
    /// Creates an empty section with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            intro: None,
            entries: Vec::new(),
        }
    }

    /// Appends a paragraph to the section intro.
    pub fn push_intro(&mut self, paragraph: &str) {
        match &mut self.intro {
            Some(intro) => {
                intro.push_str("\n\n");
                intro.push_str(paragraph);
            }
            None => self.intro = Some(paragraph.to_string()),
        }
    }

    /// Appends an entry.
    pub fn push_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Returns the section title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the intro text, if the section has any.
    pub fn intro(&self) -> Option<&str> {
        self.intro.as_deref()
    }

    /// Returns the entries in source order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

/// The root aggregate: an ordered sequence of sections.
///
/// A catalog is assembled once from one or more sources and is read-only
/// afterwards. Equality is structural, which makes load determinism
/// directly testable.
///
/// # Examples
///
/// ```
/// use almanac_core::catalog::{Catalog, Entry, Section};
///
/// let mut section = Section::new("Object creation");
/// section.push_entry(Entry::new("Create an empty list of a given length"));
///
/// let mut catalog = Catalog::new();
/// catalog.push_section(section);
///
/// assert_eq!(catalog.section_count(), 1);
/// assert_eq!(catalog.entry_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    sections: Vec<Section>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog from an ordered list of sections.
    pub fn from_sections(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Appends a section.
    pub fn push_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Returns the sections in catalog order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Returns the total number of entries across all sections.
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries().len()).sum()
    }

    /// Returns `true` if the catalog has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Appends all sections of `other` to this catalog, preserving order.
    ///
    /// Used when a catalog is built from multiple source files: each file is
    /// parsed on its own and the results are merged in input order.
    pub fn merge(&mut self, other: Catalog) {
        debug!(appended = other.section_count(); "Merging catalog sections");
        self.sections.extend(other.sections);
    }
}
