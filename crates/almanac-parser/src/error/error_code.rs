//! Error codes for the Almanac diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Scan errors
//! - `E1xx` - Structure errors
//! - `E2xx` - Validation errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Scan Errors (E0xx)
    // =========================================================================
    /// Unterminated code fence.
    ///
    /// A fenced block was opened with ``` ``` ``` but never closed before the
    /// end of the document.
    E001,

    /// Heading level too deep.
    ///
    /// Only `#` (section) and `##` (entry) headings are part of the catalog
    /// format; `###` and deeper have no meaning here.
    E002,

    /// Missing heading title.
    ///
    /// A heading marker was found with no title text after it. Every section
    /// and entry needs a title, since anchors are derived from titles.
    E003,

    // =========================================================================
    // Structure Errors (E1xx)
    // =========================================================================
    /// Entry outside any section.
    ///
    /// An `##` entry heading appeared before the first `#` section heading.
    E100,

    /// Fenced block outside any entry.
    ///
    /// Code samples and example outputs belong to entries; a fence appeared
    /// where there is no current entry to attach it to.
    E101,

    // =========================================================================
    // Validation Errors (E2xx)
    // =========================================================================
    /// Duplicate entry title within a section.
    ///
    /// Entry titles must be unique within their section.
    E200,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Scan errors
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            // Structure errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            // Validation errors
            ErrorCode::E200 => "E200",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            // Scan errors
            ErrorCode::E001 => "unterminated code fence",
            ErrorCode::E002 => "heading level too deep",
            ErrorCode::E003 => "missing heading title",
            // Structure errors
            ErrorCode::E100 => "entry outside any section",
            ErrorCode::E101 => "fenced block outside any entry",
            // Validation errors
            ErrorCode::E200 => "duplicate entry title",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E200.to_string(), "E200");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E001.description(), "unterminated code fence");
        assert_eq!(ErrorCode::E100.description(), "entry outside any section");
        assert_eq!(ErrorCode::E200.description(), "duplicate entry title");
    }
}
