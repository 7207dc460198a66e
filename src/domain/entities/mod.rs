//! Core domain entities representing the business data model.
//!
//! - [`Link`] - A shortened URL mapping with its click counter
//! - [`NewLink`] - Validated input for creating a link
//! - [`DatabaseDump`] - Administrative snapshot of every stored link

pub mod link;

pub use link::{DatabaseDump, DumpEntry, Link, NewLink};
