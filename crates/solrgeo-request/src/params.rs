//! Incoming and outgoing request parameter types.

use std::collections::HashMap;

use serde::Serialize;

/// The user-facing parameters of the incoming search request.
///
/// These are boundary inputs handed over by the host framework; the rules
/// only read them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParams {
    /// Action name of the current request (e.g. `index`, `show`).
    pub action: String,
    /// Raw bounding-box parameter, if the user supplied one.
    pub bbox: Option<String>,
    /// Selected facet values, keyed by Solr field name.
    pub facets: HashMap<String, Vec<String>>,
}

impl RequestParams {
    /// Creates parameters for the given action with nothing selected.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            ..Self::default()
        }
    }

    /// Sets the bounding-box parameter.
    #[must_use]
    pub fn with_bbox(mut self, bbox: impl Into<String>) -> Self {
        self.bbox = Some(bbox.into());
        self
    }

    /// Adds a selected facet value.
    #[must_use]
    pub fn with_facet(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.facets.entry(field.into()).or_default().push(value.into());
        self
    }
}

/// The outgoing Solr parameters the shaping rules touch.
///
/// Field names serialize to the Solr wire names (`bq`, `fq`, `sort`), so a
/// serialized value drops straight into a Solr request. The value is owned
/// by the caller; the rules only append to or rewrite the listed keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchParams {
    /// Boost queries (`bq`): predicates that raise relevance without
    /// restricting membership.
    #[serde(rename = "bq")]
    pub boost_query: Vec<String>,
    /// Filter queries (`fq`): non-scoring predicates that restrict the
    /// result set.
    #[serde(rename = "fq")]
    pub filter_query: Vec<String>,
    /// Sort expression.
    pub sort: String,
}

impl SearchParams {
    /// Creates empty parameters with the given sort expression.
    pub fn with_sort(sort: impl Into<String>) -> Self {
        Self {
            sort: sort.into(),
            ..Self::default()
        }
    }
}
