//! Catalog data model shared by the loader, renderer and host adapters.

pub mod domain;
pub mod filter;
