//! Bounding box parsing and spatial envelopes for solrgeo.
//!
//! This crate converts the textual bounding-box parameter of a search
//! request into a [`BoundingBox`] and renders it as the `ENVELOPE(...)`
//! rectangle syntax Solr's spatial field types understand:
//!
//! - **Rectangle format**: `"minX minY maxX maxY"` - four space-separated
//!   numbers, the Solr lat-lon rectangle order
//! - **Coordinate format**: `"minX,minY,maxX,maxY"` - the comma-delimited
//!   form map widgets tend to emit
//!
//! # Example
//!
//! ```
//! use solrgeo_spatial::BoundingBox;
//!
//! let bbox = BoundingBox::from_rectangle("-10 -5 10 5").unwrap();
//! assert_eq!(bbox.envelope().to_string(), "ENVELOPE(-10, 10, 5, -5)");
//! ```

#![warn(missing_docs)]

mod bbox;
mod envelope;
mod error;

pub use bbox::BoundingBox;
pub use envelope::Envelope;
pub use error::WrongBoundingBoxFormat;
