//! The spatial boost/filter rule.

use log::warn;
use solrgeo_config::Config;
use solrgeo_spatial::{BoundingBox, Envelope, WrongBoundingBoxFormat};

use crate::{RequestParams, SearchParams};

/// Result of the spatial rule for one request.
#[derive(Debug, Clone, PartialEq)]
pub enum SpatialOutcome {
    /// Both spatial clauses were added using this envelope.
    Applied(Envelope),
    /// The rule left the request untouched.
    Skipped(SpatialSkip),
}

impl SpatialOutcome {
    /// Whether the rule added its clauses.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Why the spatial rule did not fire.
#[derive(Debug, Clone, PartialEq)]
pub enum SpatialSkip {
    /// The request carried no bounding-box parameter.
    NoBbox,
    /// The bounding-box parameter did not parse. The search proceeds
    /// without spatial filtering rather than failing outright; the error
    /// is reported here instead of being propagated.
    Malformed(WrongBoundingBoxFormat),
}

/// Applies the spatial rule.
///
/// On success the boost-query list is *replaced* with a single `IsWithin`
/// clause (re-running the rule with the same box is idempotent for `bq`)
/// and an `Intersects` clause is appended to the filter-query list.
pub(crate) fn apply_spatial(
    config: &Config,
    request: &RequestParams,
    params: &mut SearchParams,
) -> SpatialOutcome {
    let Some(raw) = request.bbox.as_deref() else {
        return SpatialOutcome::Skipped(SpatialSkip::NoBbox);
    };

    let bbox: BoundingBox = match raw.parse() {
        Ok(bbox) => bbox,
        Err(err) => {
            warn!("ignoring malformed bbox parameter: {err}");
            return SpatialOutcome::Skipped(SpatialSkip::Malformed(err));
        }
    };

    let envelope = bbox.envelope();
    let geometry = &config.fields.geometry;

    params.boost_query = vec![format!(
        "{geometry}:\"IsWithin({envelope})\"^{boost}",
        boost = config.spatial_boost
    )];
    params
        .filter_query
        .push(format!("{geometry}:\"Intersects({envelope})\""));

    SpatialOutcome::Applied(envelope)
}
