//! Folio: static portfolio site builder.
//!
//! Pages are rendered from a TOML content file; project image galleries are
//! rendered as hidden overlays and driven at runtime by
//! [`gallery::GalleryController`] through the [`gallery::Document`] seam.

pub mod boot;
pub mod config;
pub mod dom;
pub mod gallery;
pub mod models;
pub mod pages;
pub mod render;
