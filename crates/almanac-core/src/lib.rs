//! Almanac Core Types and Definitions
//!
//! This crate provides the foundational types for the Almanac tips catalog.
//! It includes:
//!
//! - **Anchors**: Efficient string-interned link anchors and the title
//!   slugging transform ([`anchor::Anchor`], [`anchor::slugify`])
//! - **Catalog**: The owned Section/Entry content model ([`catalog`] module)

pub mod anchor;
pub mod catalog;
