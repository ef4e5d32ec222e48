//! External key-value store access.
//!
//! The backing store is a flat JSON object keyed by opaque record
//! identifiers, exposed over HTTP: reads return the whole collection (or
//! a tail slice), writes target `{collection}/{id}.json` paths. It has
//! no query capability and no transactions.
//!
//! [`client::StoreClient`] owns the HTTP plumbing (timeouts, retry with
//! backoff) and [`records`] owns the wire-schema translation, so the
//! store's attribute names never leak past this module.

pub mod client;
pub mod records;

pub use client::StoreClient;
pub use records::StoredReport;
