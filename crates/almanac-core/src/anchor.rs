//! Anchor management using string interning for efficient storage and comparison
//!
//! This module provides the [`Anchor`] type with an efficient string-interner
//! based approach, plus [`slugify`], the transform that derives an anchor
//! string from a human-readable title.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for efficient anchor storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Derive an anchor slug from a title.
///
/// The transform:
/// - lower-cases the title,
/// - collapses every whitespace run into a single hyphen,
/// - strips characters outside letters, digits, and hyphens.
///
/// The result may be empty when the title contains no letters, digits, or
/// hyphens at all; callers deciding whether an anchor is usable must check
/// for that case.
///
/// # Examples
///
/// ```
/// use almanac_core::anchor::slugify;
///
/// assert_eq!(
///     slugify("Create an empty list of a given length"),
///     "create-an-empty-list-of-a-given-length"
/// );
/// assert_eq!(slugify("Don't repeat yourself"), "dont-repeat-yourself");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for chunk in title.split_whitespace() {
        if !slug.is_empty() {
            slug.push('-');
        }
        for c in chunk.chars() {
            if c.is_alphanumeric() {
                // Lowercasing can expand to multiple characters; keep only the
                // ones that are still inside the allowed set.
                slug.extend(c.to_lowercase().filter(|lc| lc.is_alphanumeric()));
            } else if c == '-' {
                slug.push('-');
            }
        }
    }
    slug
}

/// Efficient anchor type using string interning
///
/// An `Anchor` is a URL-fragment-safe identifier derived from a title. The
/// interned representation makes equality checks and hashing cheap, which
/// matters when every anchor in an outline is checked against every
/// previously seen one.
///
/// # Examples
///
/// ```
/// use almanac_core::anchor::Anchor;
///
/// let anchor = Anchor::new("object-creation");
/// let same = Anchor::new("object-creation");
/// assert_eq!(anchor, same);
/// assert_eq!(anchor.to_string(), "object-creation");
///
/// // Derive directly from a title
/// let derived = Anchor::from_title("Object creation");
/// assert_eq!(derived, anchor);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor(DefaultSymbol);

impl Anchor {
    /// Creates an `Anchor` from an already-slugged string.
    ///
    /// # Arguments
    ///
    /// * `slug` - The string representation of the anchor
    ///
    /// # Examples
    ///
    /// ```
    /// use almanac_core::anchor::Anchor;
    ///
    /// let anchor = Anchor::new("run-length-encoding");
    /// ```
    pub fn new(slug: &str) -> Self {
        let mut interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(slug);
        Self(symbol)
    }

    /// Creates an `Anchor` by slugging a title.
    ///
    /// Equivalent to `Anchor::new(&slugify(title))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use almanac_core::anchor::Anchor;
    ///
    /// let anchor = Anchor::from_title("Factor handling");
    /// assert_eq!(anchor, "factor-handling");
    /// ```
    pub fn from_title(title: &str) -> Self {
        Self::new(&slugify(title))
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{}", str_value)
    }
}

impl From<&str> for Anchor {
    /// Creates an `Anchor` from a string slice
    ///
    /// This is a convenience implementation that calls `Anchor::new`.
    fn from(slug: &str) -> Self {
        Self::new(slug)
    }
}

impl PartialEq<str> for Anchor {
    /// Allows direct comparison with string slices: `anchor == "string"`
    ///
    /// # Examples
    ///
    /// ```
    /// use almanac_core::anchor::Anchor;
    ///
    /// let anchor = Anchor::new("setup");
    /// assert!(anchor == "setup");
    /// ```
    fn eq(&self, other: &str) -> bool {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Anchor {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl serde::Serialize for Anchor {
    /// Serializes the anchor as its resolved string.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Object creation"), "object-creation");
        assert_eq!(
            slugify("Create an empty list of a given length"),
            "create-an-empty-list-of-a-given-length"
        );
    }

    #[test]
    fn test_slugify_collapses_whitespace_runs() {
        assert_eq!(slugify("Run  length\tencoding"), "run-length-encoding");
        assert_eq!(slugify("a \n b"), "a-b");
    }

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("Don't repeat yourself!"), "dont-repeat-yourself");
        assert_eq!(slugify("on.exit() hooks"), "onexit-hooks");
    }

    #[test]
    fn test_slugify_keeps_existing_hyphens() {
        assert_eq!(slugify("Run-length encoding"), "run-length-encoding");
    }

    #[test]
    fn test_slugify_trims_surrounding_whitespace() {
        assert_eq!(slugify("  Setup  "), "setup");
    }

    #[test]
    fn test_slugify_can_be_empty() {
        assert_eq!(slugify("???"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_anchor_equality_and_display() {
        let a = Anchor::new("factor-handling");
        let b = Anchor::from_title("Factor handling");
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "factor-handling");
        assert!(a == "factor-handling");
    }

    #[test]
    fn test_anchor_distinct_slugs_differ() {
        assert_ne!(Anchor::new("setup"), Anchor::new("teardown"));
    }

    proptest! {
        #[test]
        fn slugify_output_stays_in_allowed_set(title in ".{0,64}") {
            let slug = slugify(&title);
            prop_assert!(
                slug.chars().all(|c| c == '-' || (c.is_alphanumeric() && !c.is_uppercase()))
            );
        }

        #[test]
        fn slugify_is_idempotent(title in ".{0,64}") {
            let once = slugify(&title);
            prop_assert_eq!(slugify(&once), once);
        }
    }
}
