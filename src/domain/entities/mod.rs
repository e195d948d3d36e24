//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without persistence concerns. Creation
//! payloads live next to the entity they produce:
//!
//! - [`ShortLink`] - A stored short code to URL mapping
//! - [`NewShortLink`] - Insert payload for a short link
//! - [`LinkTotals`] - Aggregate counters used by the admin CLI

pub mod link;

pub use link::{LinkTotals, NewShortLink, ShortLink};
