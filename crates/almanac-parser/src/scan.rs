//! Block scanner for catalog markdown source.
//!
//! The scanner converts source text into a stream of [`RawBlock`]s for
//! assembly: section and entry headings, fenced blocks, and paragraphs,
//! each carrying its byte span. Blank lines separate blocks and are
//! otherwise insignificant.
//!
//! Scanning is error-recovering: a malformed construct produces a
//! diagnostic and scanning continues, so a single pass reports every
//! problem in the source. The public entry point is [`scan`].

use log::debug;
use winnow::{
    ModalResult, Parser,
    ascii::{line_ending, till_line_ending},
    combinator::{alt, eof, not, opt, preceded, repeat, terminated},
    stream::{LocatingSlice, Stream},
    token::{literal, take_while},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::{Span, Spanned},
};

/// One source block produced by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RawBlock<'src> {
    /// A `#` section heading.
    Section { title: &'src str },
    /// A `##` entry heading.
    Entry { title: &'src str },
    /// A closed fenced block with its info string and body.
    Fence { info: &'src str, body: &'src str },
    /// A run of non-blank prose lines, joined with `\n`.
    Paragraph { text: String },
}

type Input<'src> = LocatingSlice<&'src str>;

/// A heading as scanned, before its level is checked.
#[derive(Debug)]
struct RawHeading<'src> {
    level: usize,
    title: &'src str,
}

/// A fenced block as scanned. `closed` is false when the fence ran to the
/// end of the document without a closing line.
#[derive(Debug)]
struct RawFence<'src> {
    info: &'src str,
    body: &'src str,
    closed: bool,
}

#[derive(Debug)]
enum Scanned<'src> {
    Heading(RawHeading<'src>),
    Fence(RawFence<'src>),
    Paragraph(String),
}

/// Parse a line terminator or end of input.
fn line_end(input: &mut Input<'_>) -> ModalResult<()> {
    alt((line_ending.void(), eof.void())).parse_next(input)
}

/// Parse zero or more blank lines.
fn blank_lines(input: &mut Input<'_>) -> ModalResult<()> {
    repeat(0.., (take_while(0.., (' ', '\t')), line_ending).void()).parse_next(input)
}

/// Parse a heading line: one or more `#` markers followed by a title.
fn heading<'src>(input: &mut Input<'src>) -> ModalResult<RawHeading<'src>> {
    (
        take_while(1.., '#'),
        take_while(0.., (' ', '\t')),
        till_line_ending,
        line_end,
    )
        .map(|(hashes, _, rest, ()): (&str, &str, &str, ())| RawHeading {
            level: hashes.len(),
            title: rest.trim_end(),
        })
        .parse_next(input)
}

/// Parse one line inside a fence body: any line that is not a fence marker.
///
/// Fails at end of input so that an enclosing `repeat` terminates.
fn fence_body_line(input: &mut Input<'_>) -> ModalResult<()> {
    (
        not(alt((literal("```").void(), eof.void()))),
        till_line_ending,
        line_end,
    )
        .void()
        .parse_next(input)
}

/// Parse a fenced block from its opening marker.
///
/// The body runs until the next line beginning with ``` ``` ```. A fence
/// that reaches end of input without a closing line is returned with
/// `closed == false`; the caller decides how to report it.
fn fence<'src>(input: &mut Input<'src>) -> ModalResult<RawFence<'src>> {
    let (_, info, ()) = (literal("```"), till_line_ending, line_end).parse_next(input)?;
    let body = repeat::<_, _, (), _, _>(0.., fence_body_line)
        .take()
        .parse_next(input)?;
    let close = opt((literal("```"), till_line_ending, line_end)).parse_next(input)?;

    // The captured body ends with the last body line's terminator.
    let body = body.strip_suffix('\n').unwrap_or(body);
    let body = body.strip_suffix('\r').unwrap_or(body);

    Ok(RawFence {
        info: info.trim(),
        body,
        closed: close.is_some(),
    })
}

/// Parse one paragraph line: non-blank, and not the start of another block.
fn paragraph_line<'src>(input: &mut Input<'src>) -> ModalResult<&'src str> {
    preceded(
        not(alt((
            literal("```").void(),
            literal("#").void(),
            eof.void(),
        ))),
        terminated(till_line_ending, line_end),
    )
    .verify(|line: &str| !line.trim().is_empty())
    .parse_next(input)
}

/// Parse a paragraph: one or more paragraph lines joined with `\n`.
fn paragraph(input: &mut Input<'_>) -> ModalResult<String> {
    repeat(1.., paragraph_line)
        .map(|lines: Vec<&str>| {
            lines
                .iter()
                .map(|line| line.trim_end())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .parse_next(input)
}

/// Parse the next block of any kind.
fn scanned<'src>(input: &mut Input<'src>) -> ModalResult<Scanned<'src>> {
    alt((
        heading.map(Scanned::Heading),
        fence.map(Scanned::Fence),
        paragraph.map(Scanned::Paragraph),
    ))
    .parse_next(input)
}

/// Consume one raw line.
fn skip_line(input: &mut Input<'_>) -> ModalResult<()> {
    (till_line_ending, line_end).void().parse_next(input)
}

/// Scan source text into a block stream.
///
/// Performs a single error-recovering pass and collects all diagnostics;
/// returns `Err` if any scan error was found.
///
/// # Errors
///
/// Returns [`ParseError`] wrapping one diagnostic per malformed construct:
/// unterminated fences ([`ErrorCode::E001`]), headings deeper than entry
/// level ([`ErrorCode::E002`]), and headings without a title
/// ([`ErrorCode::E003`]).
pub(crate) fn scan(source: &str) -> Result<Vec<Spanned<RawBlock<'_>>>, ParseError> {
    let mut collector = DiagnosticCollector::new();
    let mut blocks = Vec::new();
    let mut input = LocatingSlice::new(source);

    loop {
        let _ = blank_lines(&mut input);
        if input.eof_offset() == 0 {
            break;
        }

        match scanned.with_span().parse_next(&mut input) {
            Ok((item, range)) => {
                let span = Span::new(range);
                match item {
                    Scanned::Heading(heading) => {
                        on_heading(heading, span, &mut blocks, &mut collector)
                    }
                    Scanned::Fence(fence) => on_fence(fence, span, &mut blocks, &mut collector),
                    Scanned::Paragraph(text) => {
                        blocks.push(Spanned::new(RawBlock::Paragraph { text }, span))
                    }
                }
            }
            Err(_) => {
                // Every non-blank line starts a heading, fence, or paragraph;
                // skip a line so scanning always advances if this is reached.
                let _ = skip_line(&mut input);
            }
        }
    }

    debug!(blocks = blocks.len(); "Scanned source blocks");

    collector.finish()?;
    Ok(blocks)
}

fn on_heading<'src>(
    heading: RawHeading<'src>,
    span: Span,
    blocks: &mut Vec<Spanned<RawBlock<'src>>>,
    collector: &mut DiagnosticCollector,
) {
    if heading.title.is_empty() {
        collector.emit(
            Diagnostic::error("missing heading title")
                .with_code(ErrorCode::E003)
                .with_label(span, "expected a title after the heading marker")
                .with_help("every section and entry needs a title; anchors are derived from titles"),
        );
        return;
    }

    match heading.level {
        1 => blocks.push(Spanned::new(
            RawBlock::Section {
                title: heading.title,
            },
            span,
        )),
        2 => blocks.push(Spanned::new(
            RawBlock::Entry {
                title: heading.title,
            },
            span,
        )),
        deeper => collector.emit(
            Diagnostic::error(format!("heading level {deeper} is too deep"))
                .with_code(ErrorCode::E002)
                .with_label(span, "only `#` and `##` headings are recognized")
                .with_help("use `#` for sections and `##` for entries"),
        ),
    }
}

fn on_fence<'src>(
    fence: RawFence<'src>,
    span: Span,
    blocks: &mut Vec<Spanned<RawBlock<'src>>>,
    collector: &mut DiagnosticCollector,
) {
    if !fence.closed {
        collector.emit(
            Diagnostic::error("unterminated code fence")
                .with_code(ErrorCode::E001)
                .with_label(span, "fence opened here is never closed")
                .with_help("add a closing ``` line"),
        );
        return;
    }

    blocks.push(Spanned::new(
        RawBlock::Fence {
            info: fence.info,
            body: fence.body,
        },
        span,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_ok(source: &str) -> Vec<RawBlock<'_>> {
        scan(source)
            .expect("expected scan to succeed")
            .into_iter()
            .map(Spanned::into_inner)
            .collect()
    }

    #[test]
    fn test_scan_headings() {
        let blocks = scan_ok("# Object creation\n\n## Generate regular sequences\n");
        assert_eq!(
            blocks,
            vec![
                RawBlock::Section {
                    title: "Object creation"
                },
                RawBlock::Entry {
                    title: "Generate regular sequences"
                },
            ]
        );
    }

    #[test]
    fn test_scan_paragraph_joins_lines() {
        let blocks = scan_ok("line one\nline two\n\nsecond paragraph\n");
        assert_eq!(
            blocks,
            vec![
                RawBlock::Paragraph {
                    text: "line one\nline two".to_string()
                },
                RawBlock::Paragraph {
                    text: "second paragraph".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_scan_fence_with_info() {
        let blocks = scan_ok("```r\nseq_len(5)\n```\n");
        assert_eq!(
            blocks,
            vec![RawBlock::Fence {
                info: "r",
                body: "seq_len(5)"
            }]
        );
    }

    #[test]
    fn test_scan_fence_preserves_blank_lines_in_body() {
        let blocks = scan_ok("```\na\n\nb\n```\n");
        assert_eq!(
            blocks,
            vec![RawBlock::Fence {
                info: "",
                body: "a\n\nb"
            }]
        );
    }

    #[test]
    fn test_scan_fence_empty_body() {
        let blocks = scan_ok("```output\n```\n");
        assert_eq!(
            blocks,
            vec![RawBlock::Fence {
                info: "output",
                body: ""
            }]
        );
    }

    #[test]
    fn test_scan_fence_swallows_heading_markers() {
        let blocks = scan_ok("```\n# not a heading\n```\n");
        assert_eq!(
            blocks,
            vec![RawBlock::Fence {
                info: "",
                body: "# not a heading"
            }]
        );
    }

    #[test]
    fn test_scan_unterminated_fence() {
        let err = scan("# Section\n```r\nrle(x)\n").unwrap_err();
        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E001));
    }

    #[test]
    fn test_scan_deep_heading() {
        let err = scan("# Section\n### Too deep\n").unwrap_err();
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E002));
    }

    #[test]
    fn test_scan_missing_title() {
        let err = scan("#\n").unwrap_err();
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E003));
    }

    #[test]
    fn test_scan_reports_multiple_errors_in_one_pass() {
        let err = scan("#\n\n### deep\n").unwrap_err();
        let codes: Vec<_> = err.diagnostics().iter().filter_map(|d| d.code()).collect();
        assert_eq!(codes, vec![ErrorCode::E003, ErrorCode::E002]);
    }

    #[test]
    fn test_scan_empty_source() {
        assert!(scan_ok("").is_empty());
        assert!(scan_ok("\n  \n\t\n").is_empty());
    }

    #[test]
    fn test_scan_crlf_line_endings() {
        let blocks = scan_ok("# Section\r\n\r\nprose\r\n");
        assert_eq!(
            blocks,
            vec![
                RawBlock::Section { title: "Section" },
                RawBlock::Paragraph {
                    text: "prose".to_string()
                },
            ]
        );
    }
}
