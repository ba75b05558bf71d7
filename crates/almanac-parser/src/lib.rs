//! Parser for the Almanac catalog markdown format.
//!
//! This crate turns catalog markdown source into an
//! [`almanac_core::catalog::Catalog`]. Parsing runs in two phases:
//!
//! 1. **Scan** ([`scan`](self) internals) - a winnow-based pass that splits
//!    the source into heading, fence, and paragraph blocks with byte spans.
//! 2. **Assemble** - folds the block stream into the Section/Entry model and
//!    enforces the structural rules (entries inside sections, fences inside
//!    entries, unique entry titles per section).
//!
//! Both phases recover from individual errors, so one parse reports every
//! problem in the source. All diagnostics come back in a single
//! [`error::ParseError`].
//!
//! # Example
//!
//! ````
//! let source = "\
//! ## Object creation
//!
//! ### Create an empty list of a given length
//!
//! Use `vector()` rather than a loop.
//!
//! ```r
//! vector(\"list\", 5)
//! ```
//! ";
//!
//! let catalog = almanac_parser::parse(source).expect("valid source");
//! assert_eq!(catalog.section_count(), 1);
//! assert_eq!(catalog.entry_count(), 1);
//! ````

pub mod error;

mod assemble;
mod scan;
mod span;

pub use span::{Span, Spanned};

use log::{debug, info};

use almanac_core::catalog::Catalog;

use crate::error::ParseError;

/// Parse catalog markdown source into a [`Catalog`].
///
/// This is the load operation for the catalog store: it performs the scan
/// and assembly phases and returns the fully built model.
///
/// # Arguments
///
/// * `source` - Catalog markdown text
///
/// # Errors
///
/// Returns [`ParseError`] when the source violates a structural expectation
/// of the format. The error wraps every diagnostic found, not just the
/// first.
pub fn parse(source: &str) -> Result<Catalog, ParseError> {
    info!(bytes = source.len(); "Parsing catalog source");

    let blocks = scan::scan(source)?;
    let catalog = assemble::assemble(blocks)?;

    debug!(
        sections = catalog.section_count(),
        entries = catalog.entry_count();
        "Catalog parsed successfully"
    );

    Ok(catalog)
}
