//! Outline renderers.
//!
//! An [`Outline`](crate::outline::Outline) is rendered into an embeddable
//! document fragment. Two formats are supported:
//!
//! - [`markdown`] - a nested bullet list of `[title](#anchor)` links
//! - [`json`] - a JSON array of `{title, anchor, depth}` objects

pub(crate) mod json;
pub(crate) mod markdown;

use thiserror::Error;

/// Errors from outline rendering.
#[derive(Debug, Error)]
pub enum Error {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
