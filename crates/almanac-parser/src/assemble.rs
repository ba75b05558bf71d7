//! Assembly of scanned blocks into a catalog.
//!
//! This pass folds the scanner's block stream into the
//! [`Catalog`](almanac_core::catalog::Catalog) model, enforcing the
//! structural rules the block grammar cannot express: entries live inside
//! sections, fenced blocks live inside entries, and entry titles are unique
//! within their section.
//!
//! Like the scanner, assembly recovers from individual errors and reports
//! everything it finds in one pass.

use std::collections::HashMap;

use log::{debug, warn};

use almanac_core::catalog::{Catalog, CodeSample, Entry, Section};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    scan::RawBlock,
    span::{Span, Spanned},
};

/// Fence info string that marks an example output rather than a code sample.
const OUTPUT_INFO: &str = "output";

/// Walk state: the section list under construction plus the entry currently
/// accepting content.
#[derive(Default)]
struct Assembler {
    sections: Vec<Section>,
    current_entry: Option<Entry>,
    /// First-occurrence spans of entry titles in the current section.
    seen_titles: HashMap<String, Span>,
}

impl Assembler {
    /// Move the entry under construction into its section.
    fn flush_entry(&mut self) {
        if let Some(entry) = self.current_entry.take() {
            let section = self
                .sections
                .last_mut()
                .expect("entries are only opened inside a section");
            section.push_entry(entry);
        }
    }

    fn on_section(&mut self, title: &str) {
        self.flush_entry();
        self.sections.push(Section::new(title));
        self.seen_titles.clear();
    }

    fn on_entry(&mut self, title: &str, span: Span, collector: &mut DiagnosticCollector) {
        self.flush_entry();

        if self.sections.is_empty() {
            collector.emit(
                Diagnostic::error(format!("entry `{title}` appears before any section"))
                    .with_code(ErrorCode::E100)
                    .with_label(span, "no enclosing section")
                    .with_help("start a section with `# Title` first"),
            );
            return;
        }

        if let Some(first_span) = self.seen_titles.get(title) {
            let section_title = self
                .sections
                .last()
                .expect("checked non-empty above")
                .title();
            collector.emit(
                Diagnostic::error(format!(
                    "entry `{title}` is defined multiple times in section `{section_title}`"
                ))
                .with_code(ErrorCode::E200)
                .with_label(span, "duplicate entry title")
                .with_secondary_label(*first_span, "first defined here")
                .with_help("rename one of the entries; anchors are derived from titles"),
            );
        } else {
            self.seen_titles.insert(title.to_string(), span);
        }

        self.current_entry = Some(Entry::new(title));
    }

    fn on_fence(
        &mut self,
        info: &str,
        body: &str,
        span: Span,
        collector: &mut DiagnosticCollector,
    ) {
        let Some(entry) = self.current_entry.as_mut() else {
            collector.emit(
                Diagnostic::error("fenced block outside any entry")
                    .with_code(ErrorCode::E101)
                    .with_label(span, "no entry to attach this block to")
                    .with_help("code samples and outputs belong under an `##` entry heading"),
            );
            return;
        };

        if info == OUTPUT_INFO {
            entry.push_output(body);
        } else {
            let language = (!info.is_empty()).then(|| info.to_string());
            entry.push_sample(CodeSample::new(language, body));
        }
    }

    fn on_paragraph(&mut self, text: &str) {
        if let Some(entry) = self.current_entry.as_mut() {
            entry.push_paragraph(text);
        } else if let Some(section) = self.sections.last_mut() {
            section.push_intro(text);
        } else {
            // Page-level prose ahead of the first section is not catalog
            // content.
            warn!("Skipping preamble text before the first section");
        }
    }

    fn finish(mut self) -> Vec<Section> {
        self.flush_entry();
        self.sections
    }
}

/// Assemble scanned blocks into a catalog.
///
/// # Errors
///
/// Returns [`ParseError`] wrapping one diagnostic per structural problem:
/// entries outside sections ([`ErrorCode::E100`]), fences outside entries
/// ([`ErrorCode::E101`]), and duplicate entry titles within a section
/// ([`ErrorCode::E200`]).
pub(crate) fn assemble(blocks: Vec<Spanned<RawBlock<'_>>>) -> Result<Catalog, ParseError> {
    let mut collector = DiagnosticCollector::new();
    let mut assembler = Assembler::default();

    for block in blocks {
        let span = block.span();
        match block.into_inner() {
            RawBlock::Section { title } => assembler.on_section(title),
            RawBlock::Entry { title } => assembler.on_entry(title, span, &mut collector),
            RawBlock::Fence { info, body } => {
                assembler.on_fence(info, body, span, &mut collector)
            }
            RawBlock::Paragraph { text } => assembler.on_paragraph(&text),
        }
    }

    let sections = assembler.finish();
    debug!(sections = sections.len(); "Assembled catalog sections");

    collector.finish()?;
    Ok(Catalog::from_sections(sections))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spanned(block: RawBlock<'_>) -> Spanned<RawBlock<'_>> {
        Spanned::new(block, Span::default())
    }

    #[test]
    fn test_assemble_sections_and_entries() {
        let catalog = assemble(vec![
            spanned(RawBlock::Section { title: "Basics" }),
            spanned(RawBlock::Entry { title: "Setup" }),
            spanned(RawBlock::Paragraph {
                text: "Explanation.".to_string(),
            }),
            spanned(RawBlock::Fence {
                info: "r",
                body: "x <- 1",
            }),
            spanned(RawBlock::Fence {
                info: "output",
                body: "[1] 1",
            }),
        ])
        .expect("expected assembly to succeed");

        assert_eq!(catalog.section_count(), 1);
        let entry = &catalog.sections()[0].entries()[0];
        assert_eq!(entry.title(), "Setup");
        assert_eq!(entry.text(), "Explanation.");
        assert_eq!(entry.samples().len(), 1);
        assert_eq!(entry.samples()[0].language(), Some("r"));
        assert_eq!(entry.outputs(), &["[1] 1".to_string()]);
    }

    #[test]
    fn test_assemble_intro_goes_to_section() {
        let catalog = assemble(vec![
            spanned(RawBlock::Section { title: "Basics" }),
            spanned(RawBlock::Paragraph {
                text: "Lead-in.".to_string(),
            }),
            spanned(RawBlock::Entry { title: "Setup" }),
        ])
        .expect("expected assembly to succeed");

        assert_eq!(catalog.sections()[0].intro(), Some("Lead-in."));
        assert_eq!(catalog.sections()[0].entries()[0].title(), "Setup");
    }

    #[test]
    fn test_assemble_entry_outside_section() {
        let err = assemble(vec![spanned(RawBlock::Entry { title: "Orphan" })]).unwrap_err();
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E100));
    }

    #[test]
    fn test_assemble_fence_outside_entry() {
        let err = assemble(vec![
            spanned(RawBlock::Section { title: "Basics" }),
            spanned(RawBlock::Fence {
                info: "r",
                body: "x",
            }),
        ])
        .unwrap_err();
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E101));
    }

    #[test]
    fn test_assemble_duplicate_entry_title() {
        let err = assemble(vec![
            spanned(RawBlock::Section { title: "Basics" }),
            spanned(RawBlock::Entry { title: "Setup" }),
            spanned(RawBlock::Entry { title: "Setup" }),
        ])
        .unwrap_err();

        let diag = &err.diagnostics()[0];
        assert_eq!(diag.code(), Some(ErrorCode::E200));
        assert!(diag.message().contains("Setup"));
        assert!(diag.message().contains("Basics"));
        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[1].is_secondary());
    }

    #[test]
    fn test_assemble_same_title_in_different_sections_is_fine_here() {
        let catalog = assemble(vec![
            spanned(RawBlock::Section { title: "First" }),
            spanned(RawBlock::Entry { title: "Setup" }),
            spanned(RawBlock::Section { title: "Second" }),
            spanned(RawBlock::Entry { title: "Setup" }),
        ])
        .expect("cross-section duplicates are caught at outline generation");

        assert_eq!(catalog.entry_count(), 2);
    }

    #[test]
    fn test_assemble_preamble_is_skipped() {
        let catalog = assemble(vec![
            spanned(RawBlock::Paragraph {
                text: "Page intro.".to_string(),
            }),
            spanned(RawBlock::Section { title: "Basics" }),
        ])
        .expect("expected assembly to succeed");

        assert_eq!(catalog.section_count(), 1);
        assert_eq!(catalog.sections()[0].intro(), None);
    }

    #[test]
    fn test_assemble_empty_input() {
        let catalog = assemble(Vec::new()).expect("expected assembly to succeed");
        assert!(catalog.is_empty());
    }
}
