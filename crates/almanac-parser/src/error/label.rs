//! Labeled source spans for diagnostic messages.
//!
//! A label associates a message with a span in the source text,
//! providing context for where an error or warning occurred.

use crate::span::Span;

/// A labeled span in source text.
///
/// Labels attach messages to specific locations in the source,
/// helping authors understand where problems occurred and why.
///
/// # Primary vs Secondary Labels
///
/// - **Primary labels** mark the main location of an error or warning.
///   There should typically be one primary label per diagnostic.
/// - **Secondary labels** provide additional context, such as "first defined
///   here".
///
/// # Example
///
/// ```text
/// error[E200]: entry `Setup` is defined multiple times in section `Basics`
///   --> tips.md:42:1
///    |
/// 42 | ## Setup
///    | ^^^^^^^^ duplicate entry title
///    |
///   --> tips.md:7:1
///    |
///  7 | ## Setup
///    | -------- first defined here
/// ```
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a new primary label.
    ///
    /// Primary labels mark the main location of an error or warning.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a new secondary label.
    ///
    /// Secondary labels provide additional context for the diagnostic.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    /// Get the span this label applies to.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the label message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this is a primary label.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    /// Check if this is a secondary label.
    pub fn is_secondary(&self) -> bool {
        !self.is_primary
    }
}
