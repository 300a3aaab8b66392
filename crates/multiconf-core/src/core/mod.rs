//! # Core Module
//!
//! Fundamental building blocks shared by every comparison run: the structural
//! data model, geometry helpers, the residue-name vocabulary, and tabular
//! output.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Read-only, document-ordered
//!   structures as delivered by an external parser
//! - **File Output** ([`io`]) - CSV tables with the column contracts that
//!   downstream consumers key on
//! - **Utilities** ([`utils`]) - Geometry primitives and residue-name lookups

pub mod io;
pub mod models;
pub mod utils;
