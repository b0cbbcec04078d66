//! Solr request shaping rules for geospatial search.
//!
//! This crate sits between an HTTP-facing search UI and the Solr backend.
//! It does no I/O of its own: given the incoming user parameters
//! ([`RequestParams`]) and the outgoing Solr parameters ([`SearchParams`]),
//! it applies two independent rules:
//!
//! - **Spatial filter**: when the request carries a bounding box, boost
//!   records fully inside it and filter to records intersecting it.
//! - **Child visibility**: hide collection members from top-level listings,
//!   or - when the user has faceted on a parent collection - widen the
//!   membership filter so the parent record lists alongside its children.
//!
//! Each rule reports a tagged outcome, so a request shaped without spatial
//! filtering (say, because the bounding box was malformed) is
//! distinguishable from one where the rule applied.
//!
//! # Example
//!
//! ```
//! use solrgeo_config::Config;
//! use solrgeo_request::{RequestParams, SearchBuilder, SearchParams};
//!
//! let config = Config::default();
//! let request = RequestParams::new("index").with_bbox("-10 -5 10 5");
//! let mut params = SearchParams::default();
//!
//! let outcome = SearchBuilder::new(&config).shape(&request, &mut params);
//! assert!(outcome.spatial.is_applied());
//! assert_eq!(params.boost_query.len(), 1);
//! ```

#![warn(missing_docs)]

mod builder;
mod params;
mod spatial;
mod visibility;

pub use builder::{SearchBuilder, ShapeOutcome};
pub use params::{RequestParams, SearchParams};
pub use spatial::{SpatialOutcome, SpatialSkip};
pub use visibility::VisibilityOutcome;
